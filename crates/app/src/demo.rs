//! Sample inventory used by the report binary.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use warehouse_core::{DomainError, DomainResult, ProductId};
use warehouse_inventory::Warehouse;
use warehouse_products::{Category, ElectronicsProduct, FoodProduct};

// (name, category, price in cents, days until expiry, weight in grams)
const FOOD: &[(&str, &str, i64, u64, i64)] = &[
    ("Whole Milk", "Dairy", 1_590, 0, 1_030),
    ("Greek Yogurt", "Dairy", 2_450, 1, 500),
    ("Sourdough Bread", "Bakery", 4_500, 2, 800),
    ("Aged Cheddar", "Dairy", 8_900, 30, 400),
    ("Frozen Berries", "Frozen", 5_990, 180, 1_000),
];

// (name, price in cents, warranty months, weight in grams)
const ELECTRONICS: &[(&str, i64, u32, i64)] = &[
    ("Laptop", 1_299_900, 24, 2_200),
    ("Smartphone", 799_900, 12, 190),
    ("Studio Monitor", 349_900, 36, 6_400),
];

/// Stock `warehouse` with a fixed mix of food and electronics.
///
/// Food expiry dates are relative to `today` so discounts show up in the report.
pub fn seed(warehouse: &Warehouse, today: NaiveDate) -> DomainResult<()> {
    for &(name, category, cents, days, grams) in FOOD {
        let expires = today
            .checked_add_days(Days::new(days))
            .ok_or_else(|| DomainError::invalid_argument("Expiration date out of range."))?;
        warehouse.add(FoodProduct::new(
            ProductId::new(),
            name,
            Category::of(category)?,
            Decimal::new(cents, 2),
            expires,
            Decimal::new(grams, 3),
        )?);
    }

    let electronics = Category::of("Electronics")?;
    for &(name, cents, warranty, grams) in ELECTRONICS {
        warehouse.add(ElectronicsProduct::new(
            ProductId::new(),
            name,
            electronics.clone(),
            Decimal::new(cents, 2),
            warranty,
            Decimal::new(grams, 3),
        )?);
    }

    tracing::debug!(products = warehouse.len(), "demo inventory seeded");
    Ok(())
}
