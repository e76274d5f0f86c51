//! JSON inventory report.

use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use warehouse_analytics::{ShippingGroup, WarehouseAnalyzer};
use warehouse_inventory::SharedProduct;

pub const MAX_GROUP_WEIGHT_VAR: &str = "WAREHOUSE_MAX_GROUP_WEIGHT";
pub const EXPIRING_WINDOW_VAR: &str = "WAREHOUSE_EXPIRING_WINDOW_DAYS";

/// Report knobs that are not analytics policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub max_group_weight: Decimal,
    pub expiring_window_days: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            max_group_weight: Decimal::from(10),
            expiring_window_days: 3,
        }
    }
}

impl ReportSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut settings = Self::default();
        if let Some(raw) = lookup(MAX_GROUP_WEIGHT_VAR) {
            settings.max_group_weight = Decimal::from_str(raw.trim())
                .with_context(|| format!("{MAX_GROUP_WEIGHT_VAR} is not a decimal: {raw:?}"))?;
        }
        if let Some(raw) = lookup(EXPIRING_WINDOW_VAR) {
            settings.expiring_window_days = raw
                .trim()
                .parse()
                .with_context(|| format!("{EXPIRING_WINDOW_VAR} is not a day count: {raw:?}"))?;
        }
        Ok(settings)
    }
}

/// Run every analysis and collect the results into one JSON document.
pub fn build_report(analyzer: &WarehouseAnalyzer<'_>, settings: &ReportSettings) -> anyhow::Result<Value> {
    let stats = analyzer
        .inventory_statistics()
        .context("inventory statistics failed")?;
    let validation = analyzer.validate_inventory_constraints();
    let groups = analyzer
        .optimize_shipping_groups(settings.max_group_weight)
        .context("shipping group optimization failed")?;
    let total_shipping_cost = analyzer
        .total_shipping_cost()
        .context("shipping cost total failed")?;

    let averages: BTreeMap<String, Decimal> = analyzer
        .weighted_average_price_by_category()
        .context("weighted average prices failed")?
        .into_iter()
        .map(|(category, price)| (category.to_string(), price))
        .collect();
    let discounts: BTreeMap<String, Decimal> = analyzer
        .expiration_based_discounts()
        .into_iter()
        .map(|(id, price)| (id.to_string(), price))
        .collect();
    let expiring: Vec<Value> = analyzer
        .find_products_expiring_within_days(settings.expiring_window_days)
        .iter()
        .map(product_summary)
        .collect();

    Ok(json!({
        "warehouse": analyzer.warehouse().name(),
        "date": analyzer.today(),
        "config": analyzer.config(),
        "statistics": {
            "total_products": stats.total_products,
            "total_value": stats.total_value,
            "average_price": stats.average_price,
            "expired_count": stats.expired_count,
            "category_count": stats.category_count,
            "most_expensive": stats.most_expensive.as_ref().map(product_summary),
            "cheapest": stats.cheapest.as_ref().map(product_summary),
        },
        "validation": validation,
        "weighted_average_price_by_category": averages,
        "expiration_discounts": discounts,
        "expiring_soon": expiring,
        "shipping": {
            "max_group_weight": settings.max_group_weight,
            "total_cost": total_shipping_cost,
            "groups": groups.iter().map(group_summary).collect::<Vec<_>>(),
        },
    }))
}

fn product_summary(product: &SharedProduct) -> Value {
    json!({
        "id": product.id(),
        "name": product.name(),
        "category": product.category(),
        "price": product.price(),
        "details": product.details(),
    })
}

fn group_summary(group: &ShippingGroup) -> Value {
    json!({
        "products": group.products().iter().map(|p| p.name().to_string()).collect::<Vec<_>>(),
        "total_weight": group.total_weight(),
        "shipping_cost": group.total_shipping_cost(),
    })
}
