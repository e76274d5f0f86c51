use chrono::NaiveDate;
use rust_decimal::Decimal;

use warehouse_core::{DomainResult, ProductId, checked_product, ensure_non_negative};

use crate::category::Category;
use crate::product::{Perishable, Product, ProductRecord, Shippable};

/// Per-kilogram shipping rate for food.
const FOOD_RATE_PER_KG: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Perishable, shippable food item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodProduct {
    record: ProductRecord,
    expiration_date: NaiveDate,
    weight: Decimal,
}

impl FoodProduct {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
        expiration_date: NaiveDate,
        weight: Decimal,
    ) -> DomainResult<Self> {
        let record = ProductRecord::new(id, name, category, price)?;
        let weight = ensure_non_negative(weight, "Weight cannot be negative.")?;
        // Weight is immutable, so a quote that fits now always fits.
        checked_product(weight, FOOD_RATE_PER_KG, "Shipping cost")?;

        Ok(Self {
            record,
            expiration_date,
            weight,
        })
    }
}

impl Product for FoodProduct {
    fn record(&self) -> &ProductRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut ProductRecord {
        &mut self.record
    }

    fn details(&self) -> String {
        format!("Food: {}, Expires: {}", self.name(), self.expiration_date)
    }

    fn boxed_clone(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }

    fn as_perishable(&self) -> Option<&dyn Perishable> {
        Some(self)
    }

    fn as_shippable(&self) -> Option<&dyn Shippable> {
        Some(self)
    }
}

impl Perishable for FoodProduct {
    fn expiration_date(&self) -> Option<NaiveDate> {
        Some(self.expiration_date)
    }
}

impl Shippable for FoodProduct {
    fn weight(&self) -> Option<Decimal> {
        Some(self.weight)
    }

    /// `weight × 50`. Cannot overflow: checked in [`FoodProduct::new`].
    fn shipping_cost(&self) -> Decimal {
        self.weight * FOOD_RATE_PER_KG
    }
}
