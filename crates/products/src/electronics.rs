use rust_decimal::Decimal;

use warehouse_core::{DomainResult, ProductId, ensure_non_negative};

use crate::category::Category;
use crate::product::{Product, ProductRecord, Shippable};

const BASE_SHIPPING: Decimal = Decimal::from_parts(79, 0, 0, false, 0);
const HEAVY_SURCHARGE: Decimal = Decimal::from_parts(49, 0, 0, false, 0);
/// Items strictly heavier than this pay the surcharge.
const HEAVY_THRESHOLD_KG: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Shippable electronics item with a warranty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectronicsProduct {
    record: ProductRecord,
    warranty_months: u32,
    weight: Decimal,
}

impl ElectronicsProduct {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
        warranty_months: u32,
        weight: Decimal,
    ) -> DomainResult<Self> {
        let record = ProductRecord::new(id, name, category, price)?;
        let weight = ensure_non_negative(weight, "Weight cannot be negative.")?;

        Ok(Self {
            record,
            warranty_months,
            weight,
        })
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Product for ElectronicsProduct {
    fn record(&self) -> &ProductRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut ProductRecord {
        &mut self.record
    }

    fn details(&self) -> String {
        format!(
            "Electronics: {}, Warranty: {} months",
            self.name(),
            self.warranty_months
        )
    }

    fn boxed_clone(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }

    fn as_shippable(&self) -> Option<&dyn Shippable> {
        Some(self)
    }
}

impl Shippable for ElectronicsProduct {
    fn weight(&self) -> Option<Decimal> {
        Some(self.weight)
    }

    /// Flat 79, plus 49 for items over 5 kg.
    fn shipping_cost(&self) -> Decimal {
        if self.weight > HEAVY_THRESHOLD_KG {
            BASE_SHIPPING + HEAVY_SURCHARGE
        } else {
            BASE_SHIPPING
        }
    }
}
