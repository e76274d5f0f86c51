use std::collections::HashMap;

use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;

use warehouse_core::{DomainResult, ProductId};
use warehouse_inventory::{SharedProduct, Warehouse};
use warehouse_products::Category;

use crate::config::{AnalyticsConfig, ConfigError};
use crate::pricing;
use crate::shipping::{self, ShippingGroup};
use crate::statistics::{self, InventoryStatistics, InventoryValidation};

/// Read-only analytics over a warehouse.
///
/// Each call snapshots the warehouse and recomputes from scratch, so results
/// reflect the store at the time of the call. Date-relative operations use
/// the injected `today` (system date by default).
#[derive(Debug, Clone)]
pub struct WarehouseAnalyzer<'a> {
    warehouse: &'a Warehouse,
    today: NaiveDate,
    config: AnalyticsConfig,
}

impl<'a> WarehouseAnalyzer<'a> {
    pub fn new(warehouse: &'a Warehouse) -> Self {
        Self {
            warehouse,
            today: Local::now().date_naive(),
            config: AnalyticsConfig::default(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Replace the thresholds. Rejects configs that fail [`AnalyticsConfig::validate`].
    pub fn with_config(mut self, config: AnalyticsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn warehouse(&self) -> &'a Warehouse {
        self.warehouse
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    // === Search and filter ===

    /// Products in `category`, in reverse snapshot order.
    pub fn find_products_in_category(&self, category: &Category) -> Vec<SharedProduct> {
        let mut found: Vec<SharedProduct> = self
            .snapshot()
            .into_iter()
            .filter(|p| p.category() == category)
            .collect();
        found.reverse();
        found
    }

    /// Products with `min <= price <= max`.
    pub fn find_products_in_price_range(&self, min: Decimal, max: Decimal) -> Vec<SharedProduct> {
        self.snapshot()
            .into_iter()
            .filter(|p| (min..=max).contains(&p.price()))
            .collect()
    }

    /// Perishables expiring between today and `today + days`, both inclusive.
    pub fn find_products_expiring_within_days(&self, days: u32) -> Vec<SharedProduct> {
        let today = self.today;
        let end = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        self.snapshot()
            .into_iter()
            .filter(|p| {
                p.as_perishable()
                    .and_then(|per| per.expiration_date())
                    .is_some_and(|expires| today <= expires && expires <= end)
            })
            .collect()
    }

    /// Case-insensitive substring match on the product name.
    pub fn search_products_by_name(&self, term: &str) -> Vec<SharedProduct> {
        let term = term.to_lowercase();
        self.snapshot()
            .into_iter()
            .filter(|p| p.name().to_lowercase().contains(&term))
            .collect()
    }

    /// Products priced strictly above `price`.
    pub fn find_products_above_price(&self, price: Decimal) -> Vec<SharedProduct> {
        self.snapshot()
            .into_iter()
            .filter(|p| p.price() > price)
            .collect()
    }

    // === Analytics ===

    pub fn weighted_average_price_by_category(&self) -> DomainResult<HashMap<Category, Decimal>> {
        let averages = pricing::weighted_average_price_by_category(&self.snapshot())?;
        tracing::debug!(categories = averages.len(), "computed weighted average prices");
        Ok(averages)
    }

    /// Discounted price for every product, keyed by id.
    pub fn expiration_based_discounts(&self) -> HashMap<ProductId, Decimal> {
        pricing::expiration_discounts(&self.snapshot(), self.today)
    }

    pub fn validate_inventory_constraints(&self) -> InventoryValidation {
        let validation = statistics::validate_inventory(&self.snapshot(), &self.config);
        if validation.is_high_value_warning() {
            tracing::warn!(
                warehouse = %self.warehouse.name(),
                percentage = validation.high_value_percentage(),
                threshold = %self.config.high_value_threshold,
                "high-value products dominate the inventory"
            );
        }
        validation
    }

    pub fn inventory_statistics(&self) -> DomainResult<InventoryStatistics> {
        statistics::inventory_statistics(&self.snapshot(), self.today)
    }

    /// Group shippable products into batches of at most `max_weight_per_group`.
    pub fn optimize_shipping_groups(
        &self,
        max_weight_per_group: Decimal,
    ) -> DomainResult<Vec<ShippingGroup>> {
        let groups = shipping::pack_shipping_groups(&self.snapshot(), max_weight_per_group)?;
        tracing::info!(
            warehouse = %self.warehouse.name(),
            groups = groups.len(),
            %max_weight_per_group,
            "shipping groups optimized"
        );
        Ok(groups)
    }

    pub fn total_shipping_cost(&self) -> DomainResult<Decimal> {
        shipping::total_shipping_cost(&self.snapshot())
    }

    fn snapshot(&self) -> Vec<SharedProduct> {
        self.warehouse.all()
    }
}
