//! `warehouse-app`
//!
//! Wiring for the `warehouse-report` binary: a demo inventory and the JSON
//! report printed over it.

pub mod demo;
pub mod report;

pub use report::{ReportSettings, build_report};
