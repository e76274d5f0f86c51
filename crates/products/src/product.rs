use chrono::NaiveDate;
use rust_decimal::Decimal;

use warehouse_core::{DomainError, DomainResult, Entity, ProductId, ensure_non_negative};

use crate::category::Category;

/// Fields shared by every catalog entry.
///
/// Concrete kinds embed a record and expose it through [`Product::record`].
/// `price` is the only mutable field and always goes through [`set_price`].
///
/// [`set_price`]: ProductRecord::set_price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    category: Category,
    price: Decimal,
}

impl ProductRecord {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("Product name cannot be blank."));
        }
        let price = ensure_non_negative(price, "Price cannot be negative.")?;

        Ok(Self {
            id,
            name,
            category,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Replace the price. Negative prices are rejected and leave the record
    /// untouched.
    pub fn set_price(&mut self, new_price: Decimal) -> DomainResult<()> {
        self.price = ensure_non_negative(new_price, "Price cannot be negative.")?;
        Ok(())
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Capability: the item expires on a calendar date.
pub trait Perishable {
    fn expiration_date(&self) -> Option<NaiveDate>;

    /// Expired means the expiration date is strictly before `today`.
    fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date().is_some_and(|date| date < today)
    }
}

/// Capability: the item has a weight (kg) and can quote its own shipping cost.
pub trait Shippable {
    fn weight(&self) -> Option<Decimal>;

    /// Kind-specific, non-negative quote derived from the item's own state.
    fn shipping_cost(&self) -> Decimal;
}

/// A catalog entry held by a warehouse.
///
/// Capabilities are discovered with [`as_perishable`](Product::as_perishable)
/// and [`as_shippable`](Product::as_shippable); kinds override the ones they
/// support.
pub trait Product: core::fmt::Debug + Send + Sync {
    fn record(&self) -> &ProductRecord;

    fn record_mut(&mut self) -> &mut ProductRecord;

    /// Human-readable, kind-specific description.
    fn details(&self) -> String;

    fn boxed_clone(&self) -> Box<dyn Product>;

    fn as_perishable(&self) -> Option<&dyn Perishable> {
        None
    }

    fn as_shippable(&self) -> Option<&dyn Shippable> {
        None
    }

    fn id(&self) -> ProductId {
        *Entity::id(self.record())
    }

    fn name(&self) -> &str {
        self.record().name()
    }

    fn category(&self) -> &Category {
        self.record().category()
    }

    fn price(&self) -> Decimal {
        self.record().price()
    }

    fn set_price(&mut self, new_price: Decimal) -> DomainResult<()> {
        self.record_mut().set_price(new_price)
    }
}

impl Clone for Box<dyn Product> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}
