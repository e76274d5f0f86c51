//! Product catalog module.
//!
//! This crate contains the catalog entry types a warehouse holds, modeled as a
//! base record plus independently attachable capabilities (`Perishable`,
//! `Shippable`). Consumers discover capabilities through `Product::as_*`
//! queries, never by concrete kind, so new kinds plug in without touching the
//! inventory or analytics crates.

pub mod category;
pub mod electronics;
pub mod food;
pub mod product;

pub use category::Category;
pub use electronics::ElectronicsProduct;
pub use food::FoodProduct;
pub use product::{Perishable, Product, ProductRecord, Shippable};
