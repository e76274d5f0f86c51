//! Builders shared by the analytics unit tests.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use warehouse_core::ProductId;
use warehouse_inventory::SharedProduct;
use warehouse_products::{
    Category, ElectronicsProduct, FoodProduct, Perishable, Product, ProductRecord, Shippable,
};

pub fn id(n: u128) -> ProductId {
    ProductId::from_uuid(Uuid::from_u128(n))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixed evaluation date used across tests.
pub fn today() -> NaiveDate {
    date(2025, 6, 10)
}

pub fn in_days(days: i64) -> NaiveDate {
    today() + chrono::Duration::days(days)
}

pub fn category(name: &str) -> Category {
    Category::of(name).unwrap()
}

pub fn food(
    n: u128,
    name: &str,
    cat: &str,
    price: Decimal,
    expires: NaiveDate,
    weight: Decimal,
) -> FoodProduct {
    FoodProduct::new(id(n), name, category(cat), price, expires, weight).unwrap()
}

pub fn electronics(n: u128, name: &str, price: Decimal, weight: Decimal) -> ElectronicsProduct {
    ElectronicsProduct::new(id(n), name, category("Electronics"), price, 24, weight).unwrap()
}

/// Shippable kind whose weight may be unknown; ships at a flat rate.
#[derive(Debug, Clone)]
pub struct Parcel {
    record: ProductRecord,
    weight: Option<Decimal>,
}

impl Parcel {
    pub fn new(n: u128, cat: &str, price: Decimal, weight: Option<Decimal>) -> Self {
        Self {
            record: ProductRecord::new(id(n), format!("Parcel {n}"), category(cat), price).unwrap(),
            weight,
        }
    }
}

impl Product for Parcel {
    fn record(&self) -> &ProductRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut ProductRecord {
        &mut self.record
    }

    fn details(&self) -> String {
        format!("Parcel: {}", self.name())
    }

    fn boxed_clone(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }

    fn as_shippable(&self) -> Option<&dyn Shippable> {
        Some(self)
    }
}

impl Shippable for Parcel {
    fn weight(&self) -> Option<Decimal> {
        self.weight
    }

    fn shipping_cost(&self) -> Decimal {
        dec!(5)
    }
}

/// Perishable kind that cannot be shipped.
#[derive(Debug, Clone)]
pub struct Bouquet {
    record: ProductRecord,
    expires: NaiveDate,
}

impl Bouquet {
    pub fn new(n: u128, price: Decimal, expires: NaiveDate) -> Self {
        Self {
            record: ProductRecord::new(id(n), "Bouquet", category("Flowers"), price).unwrap(),
            expires,
        }
    }
}

impl Product for Bouquet {
    fn record(&self) -> &ProductRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut ProductRecord {
        &mut self.record
    }

    fn details(&self) -> String {
        format!("Flowers: {}", self.name())
    }

    fn boxed_clone(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }

    fn as_perishable(&self) -> Option<&dyn Perishable> {
        Some(self)
    }
}

impl Perishable for Bouquet {
    fn expiration_date(&self) -> Option<NaiveDate> {
        Some(self.expires)
    }
}

pub fn shared<P: Product + 'static>(product: P) -> SharedProduct {
    Arc::new(product)
}
