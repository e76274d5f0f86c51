//! `warehouse-analytics`
//!
//! **Responsibility:** stateless analytics over a warehouse snapshot.
//!
//! - Every operation reads a fresh `Warehouse::all()` snapshot and recomputes.
//! - Nothing here mutates the store or caches results.
//! - Products are inspected only through their capabilities (`Perishable`,
//!   `Shippable`), never by concrete kind.

pub mod analyzer;
pub mod config;
pub mod pricing;
pub mod shipping;
pub mod statistics;

#[cfg(test)]
mod fixtures;

pub use analyzer::WarehouseAnalyzer;
pub use config::{AnalyticsConfig, ConfigError};
pub use pricing::{discount_multiplier, expiration_discounts, weighted_average_price_by_category};
pub use shipping::{ShippingGroup, pack_shipping_groups, total_shipping_cost};
pub use statistics::{InventoryStatistics, InventoryValidation, inventory_statistics, validate_inventory};
