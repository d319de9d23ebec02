//! FILENAME: frontend/tests/chart_tests.rs

mod common;

use chart_engine::ChartType;
use common::*;

#[test]
fn test_non_sequential_dimension_gives_bar_chart() {
    let chart = frontend().create_chart(&sales_by_region(), ChartType::Auto).unwrap();
    let json = chart.to_value().unwrap();

    assert_eq!(json["type"], "bar");
    assert_eq!(json["data"]["labels"], serde_json::json!(["North", "South", "West"]));
}

#[test]
fn test_sequential_dimension_gives_line_chart() {
    let chart = frontend().create_chart(&monthly_sales(), ChartType::Auto).unwrap();
    let json = chart.to_value().unwrap();

    assert_eq!(json["type"], "line");
    assert_eq!(json["data"]["labels"][0], "January");
    assert_eq!(json["options"]["spanGaps"], true);
}

#[test]
fn test_two_dimensions_give_grouped_bar_chart() {
    let chart = frontend()
        .create_chart(&sales_by_region_and_product(), ChartType::Auto)
        .unwrap();
    let json = chart.to_value().unwrap();

    assert_eq!(json["type"], "bar");
    assert_eq!(json["data"]["datasets"].as_array().map(|d| d.len()), Some(2));
    assert_eq!(json["options"]["plugins"]["legend"]["title"]["text"], "Product");
}

#[test]
fn test_incompatible_units_stay_apart() {
    let chart = frontend().create_chart(&sales_by_region(), ChartType::Line).unwrap();

    let labels: Vec<_> = chart.data.datasets.iter().filter_map(|d| d.label.clone()).collect();
    assert_eq!(labels, vec!["Revenue", "Cost"]);
    assert_eq!(chart.data.datasets[0].data, vec![1200.0, 950.0, 1500.5]);
    assert_eq!(chart.options["scales"]["y"]["title"]["text"], "EUR");
}

#[test]
fn test_empty_result_is_unsupported_data() {
    let error = frontend().create_chart(&empty_result(), ChartType::Auto).unwrap_err();

    assert!(!error.is_generic());
    assert_eq!(error.to_string(), "Result is empty");
}

#[test]
fn test_unsupported_chart_message_is_translated() {
    let frontend = frontend_with(
        r#"{ "locale": "fr", "catalogs": { "fr": { "Only one measure is supported": "Une seule mesure est prise en charge" } } }"#,
    );

    // revenue and cost share a unit, so both are selected
    let error = frontend.create_chart(&sales_by_region(), ChartType::Pie).unwrap_err();
    assert_eq!(frontend.trans(&error), "Une seule mesure est prise en charge");
}

#[test]
fn test_chart_locale_follows_config() {
    let chart = frontend_with(r#"{ "locale": "de" }"#)
        .create_chart(&monthly_sales(), ChartType::Bar)
        .unwrap();

    assert_eq!(chart.options["locale"], "de");
}

#[test]
fn test_chart_from_cube() {
    let cube = sales_by_region_and_product().cube();
    let chart = frontend()
        .create_chart_from_cube(&cube, &strings(&["region", "product"]), &[], ChartType::StackedBar)
        .unwrap();

    assert_eq!(chart.options["scales"]["x"]["stacked"], true);
    assert_eq!(chart.options["scales"]["y"]["stacked"], true);
    assert_eq!(chart.data.datasets[1].data, vec![150.0, 0.0]);
}

#[test]
fn test_chart_json_document() {
    let chart = frontend().create_chart(&monthly_sales(), ChartType::Pie).unwrap();
    let json: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();

    assert_eq!(json["type"], "pie");
    assert_eq!(json["data"]["datasets"][0]["data"], serde_json::json!([100.0, 200.0, 300.0, 400.0]));
}
