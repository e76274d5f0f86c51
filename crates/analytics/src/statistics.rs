use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use warehouse_core::{DomainResult, checked_sum, round_currency};
use warehouse_inventory::SharedProduct;
use warehouse_products::{Category, Product};

use crate::config::AnalyticsConfig;

/// Outcome of the inventory constraint check.
///
/// The two flags are derived from the raw measurements at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryValidation {
    high_value_percentage: f64,
    category_diversity: usize,
    high_value_warning: bool,
    minimum_diversity: bool,
}

impl InventoryValidation {
    /// Derive the flags with the default policy (> 70 %, at least 2 categories).
    pub fn new(high_value_percentage: f64, category_diversity: usize) -> Self {
        Self::with_limits(
            high_value_percentage,
            category_diversity,
            &AnalyticsConfig::default(),
        )
    }

    pub fn with_limits(
        high_value_percentage: f64,
        category_diversity: usize,
        config: &AnalyticsConfig,
    ) -> Self {
        Self {
            high_value_percentage,
            category_diversity,
            high_value_warning: high_value_percentage > config.high_value_warning_percentage,
            minimum_diversity: category_diversity >= config.minimum_category_diversity,
        }
    }

    /// Share of products priced at or above the threshold, in `[0, 100]`.
    pub fn high_value_percentage(&self) -> f64 {
        self.high_value_percentage
    }

    pub fn category_diversity(&self) -> usize {
        self.category_diversity
    }

    pub fn is_high_value_warning(&self) -> bool {
        self.high_value_warning
    }

    pub fn has_minimum_diversity(&self) -> bool {
        self.minimum_diversity
    }
}

/// Aggregate figures for one snapshot.
#[derive(Debug, Clone)]
pub struct InventoryStatistics {
    pub total_products: usize,
    pub total_value: Decimal,
    /// Zero when empty, otherwise rounded to two decimals.
    pub average_price: Decimal,
    pub expired_count: usize,
    pub category_count: usize,
    /// First product with the highest price, in snapshot order.
    pub most_expensive: Option<SharedProduct>,
    /// First product with the lowest price, in snapshot order.
    pub cheapest: Option<SharedProduct>,
}

pub fn validate_inventory(
    products: &[SharedProduct],
    config: &AnalyticsConfig,
) -> InventoryValidation {
    if products.is_empty() {
        return InventoryValidation::with_limits(0.0, 0, config);
    }

    let high_value_count = products
        .iter()
        .filter(|p| p.price() >= config.high_value_threshold)
        .count();
    let percentage = (high_value_count as f64 * 100.0) / products.len() as f64;

    InventoryValidation::with_limits(percentage, distinct_categories(products), config)
}

/// Fails only when the summed prices leave the decimal range.
pub fn inventory_statistics(
    products: &[SharedProduct],
    today: NaiveDate,
) -> DomainResult<InventoryStatistics> {
    let total_products = products.len();
    let total_value = checked_sum(products.iter().map(|p| p.price()), "Total inventory value")?;
    let average_price = if total_products == 0 {
        Decimal::ZERO
    } else {
        round_currency(total_value / Decimal::from(total_products))
    };

    Ok(InventoryStatistics {
        total_products,
        total_value,
        average_price,
        expired_count: products.iter().filter(|p| is_expired_food(p.as_ref(), today)).count(),
        category_count: distinct_categories(products),
        most_expensive: first_by_price(products, |candidate, best| candidate > best),
        cheapest: first_by_price(products, |candidate, best| candidate < best),
    })
}

fn distinct_categories(products: &[SharedProduct]) -> usize {
    products
        .iter()
        .map(|p| p.category())
        .collect::<HashSet<&Category>>()
        .len()
}

// Expiry only counts for items that are both perishable and shippable.
fn is_expired_food(product: &dyn Product, today: NaiveDate) -> bool {
    product.as_shippable().is_some()
        && product
            .as_perishable()
            .is_some_and(|perishable| perishable.is_expired(today))
}

/// Keeps the earliest product unless a later one strictly beats it.
fn first_by_price(
    products: &[SharedProduct],
    beats: impl Fn(Decimal, Decimal) -> bool,
) -> Option<SharedProduct> {
    let mut best: Option<&SharedProduct> = None;
    for product in products {
        match best {
            Some(current) if !beats(product.price(), current.price()) => {}
            _ => best = Some(product),
        }
    }
    best.cloned()
}
