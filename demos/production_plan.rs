//! 生產建議計算示例
//!
//! 執行：`RUST_LOG=debug cargo run --example production_plan`

use prodplan::{InMemoryCatalog, PlannerConfig, ProductionPlanner};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== 生產建議計算示例 ===\n");

    // 原物料
    let mut catalog = InMemoryCatalog::new();
    let steel = catalog.create_raw_material("RM-STEEL", "鋼材", Decimal::from_str("10.000")?)?;
    let rubber = catalog.create_raw_material("RM-RUB", "橡膠", Decimal::from_str("10.000")?)?;
    let pigment = catalog.create_raw_material("RM-PIG", "色料", Decimal::from_str("3.000")?)?;

    // 成品與組成
    let frame = catalog.create_product("BIKE-FRAME", "車架", Decimal::from_str("100.00")?)?;
    let bracket = catalog.create_product("BRACKET", "支架", Decimal::from_str("30.00")?)?;
    let tire = catalog.create_product("TIRE", "輪胎", Decimal::from_str("20.00")?)?;
    catalog.create_product("MANUAL", "說明書", Decimal::from_str("5.00")?)?;

    catalog.add_composition(frame.id, steel.id, Decimal::from_str("4.000")?)?;
    catalog.add_composition(bracket.id, steel.id, Decimal::from_str("2.000")?)?;
    catalog.add_composition(tire.id, rubber.id, Decimal::from_str("2.000")?)?;
    catalog.add_composition(tire.id, pigment.id, Decimal::from_str("1.000")?)?;

    println!("原物料庫存:");
    for raw_material in catalog.raw_materials() {
        println!(
            "  - {} ({}): {}",
            raw_material.code, raw_material.name, raw_material.stock_quantity
        );
    }

    let planner = ProductionPlanner::new(&catalog).with_config(PlannerConfig::default());
    let result = planner.compute_suggestions()?;

    println!("\n建議生產:");
    for item in &result.items {
        println!(
            "  - {} ({}): {} 件 × {} = {}",
            item.product_code,
            item.product_name,
            item.suggested_quantity,
            item.unit_value,
            item.subtotal_value
        );
    }
    println!("總生產價值: {}", result.total_production_value);

    println!("\nJSON:\n{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
