use anyhow::Context;
use chrono::Local;

use warehouse_analytics::{AnalyticsConfig, WarehouseAnalyzer};
use warehouse_app::{ReportSettings, build_report, demo};
use warehouse_inventory::Warehouse;

fn main() -> anyhow::Result<()> {
    warehouse_observability::init();

    let config = AnalyticsConfig::from_env().context("invalid analytics configuration")?;
    let settings = ReportSettings::from_env()?;
    let name = std::env::var("WAREHOUSE_NAME").unwrap_or_else(|_| {
        tracing::debug!("WAREHOUSE_NAME not set; using default");
        Warehouse::DEFAULT_NAME.to_string()
    });

    let today = Local::now().date_naive();
    let warehouse = Warehouse::new(name);
    demo::seed(&warehouse, today)?;

    let analyzer = WarehouseAnalyzer::new(&warehouse)
        .with_today(today)
        .with_config(config)?;
    let report = build_report(&analyzer, &settings)?;

    tracing::info!(warehouse = %warehouse.name(), products = warehouse.len(), "report generated");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
