//! `warehouse-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the error model, and currency rounding rules shared by the
//! catalog, the inventory store and the analytics engine.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use money::{checked_product, checked_sum, ensure_non_negative, round_currency, CURRENCY_SCALE};
pub use value_object::ValueObject;
