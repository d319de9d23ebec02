//! FILENAME: frontend/tests/common/mod.rs
//! Shared fixtures for the frontend integration tests.

#![allow(dead_code)]

use analytics_model::{AnalyticsResult, MeasureDescriptor, ResultBuilder, SequenceMember, Unit, Value};
use frontend::{Frontend, FrontendConfig};

pub fn frontend() -> Frontend {
    Frontend::new(FrontendConfig::default()).unwrap()
}

pub fn frontend_with(json: &str) -> Frontend {
    Frontend::new(FrontendConfig::from_json_str(json).unwrap()).unwrap()
}

pub fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Revenue (EUR), cost (EUR) and order count per region.
pub fn sales_by_region() -> AnalyticsResult {
    let eur = Unit::symbol("EUR");
    ResultBuilder::new()
        .dimension("region", "Region")
        .measure(MeasureDescriptor::new("revenue", "Revenue").with_unit(eur.clone()))
        .measure(MeasureDescriptor::new("orders", "Orders"))
        .measure(MeasureDescriptor::new("cost", "Cost").with_unit(eur))
        .row(vec!["North".into()], vec![Value::Int(1200), Value::Int(12), Value::Int(800)])
        .row(vec!["South".into()], vec![Value::Int(950), Value::Int(9), Value::Int(700)])
        .row(vec!["West".into()], vec![Value::Float(1500.5), Value::Int(15), Value::Int(900)])
        .build()
}

pub fn monthly_sales() -> AnalyticsResult {
    let months = ["January", "February", "March", "April"];
    months
        .iter()
        .enumerate()
        .fold(
            ResultBuilder::new()
                .dimension("month", "Month")
                .measure(MeasureDescriptor::new("sales", "Sales")),
            |builder, (i, name)| {
                builder.row(
                    vec![SequenceMember::new("month", i as i64 + 1, *name).into()],
                    vec![Value::Int(100 * (i as i64 + 1))],
                )
            },
        )
        .build()
}

/// Sales per region and product, ordered by region.
pub fn sales_by_region_and_product() -> AnalyticsResult {
    ResultBuilder::new()
        .dimension("region", "Region")
        .dimension("product", "Product")
        .measure(MeasureDescriptor::new("sales", "Sales"))
        .row(vec!["North".into(), "Apples".into()], vec![Value::Int(100)])
        .row(vec!["North".into(), "Oranges".into()], vec![Value::Int(150)])
        .row(vec!["South".into(), "Apples".into()], vec![Value::Int(200)])
        .build()
}

/// Same data, regions interleaved.
pub fn unordered_sales() -> AnalyticsResult {
    ResultBuilder::new()
        .dimension("region", "Region")
        .dimension("product", "Product")
        .measure(MeasureDescriptor::new("sales", "Sales"))
        .row(vec!["North".into(), "Apples".into()], vec![Value::Int(100)])
        .row(vec!["South".into(), "Apples".into()], vec![Value::Int(200)])
        .row(vec!["North".into(), "Oranges".into()], vec![Value::Int(150)])
        .build()
}

pub fn empty_result() -> AnalyticsResult {
    ResultBuilder::new()
        .dimension("region", "Region")
        .measure(MeasureDescriptor::new("sales", "Sales"))
        .build()
}
