//! FILENAME: frontend/tests/table_tests.rs

mod common;

use common::*;
use html_renderer::OutputType;

#[test]
fn test_auto_render_pivots_measures() {
    let html = frontend_with(r#"{ "theme": "plain" }"#)
        .render(&sales_by_region(), OutputType::Auto)
        .unwrap();

    assert!(html.starts_with(
        "<table><thead><tr><th>Region</th><th>Revenue</th><th>Orders</th><th>Cost</th></tr></thead>"
    ));
    assert!(html.contains("<tr><th>West</th><td>1,500.5</td><td>15</td><td>900</td></tr>"));
}

#[test]
fn test_numbers_follow_locale() {
    let html = frontend_with(r#"{ "theme": "plain", "locale": "de" }"#)
        .render(&sales_by_region(), OutputType::Table)
        .unwrap();

    assert!(html.contains("<td>1.500,5</td>"));
}

#[test]
fn test_pivoted_dimension() {
    let html = frontend_with(r#"{ "theme": "plain" }"#)
        .render_pivoted(
            &sales_by_region_and_product(),
            OutputType::PivotTable,
            &strings(&["product", "@values"]),
        )
        .unwrap();

    assert!(html.contains("<th>Apples</th><th>Oranges</th>"));
    assert!(html.contains("<tr><th>South</th><td>200</td><td></td></tr>"));
}

#[test]
fn test_auto_falls_back_to_flat_table() {
    let html = frontend().render(&unordered_sales(), OutputType::Auto).unwrap();

    assert!(html.contains("table-bordered"));
    assert!(!html.contains("rowspan"));
    assert!(html.contains("South"));
}

#[test]
fn test_render_or_error_shows_translated_error() {
    let frontend = frontend_with(
        r#"{ "locale": "id", "catalogs": { "id": { "The result is empty.": "Hasil kosong." } } }"#,
    );

    let html = frontend.render_or_error(&empty_result(), OutputType::Auto);
    assert_eq!(html, "<div class=\"alert alert-danger\" role=\"alert\">Hasil kosong.</div>");
}

#[test]
fn test_unknown_theme_is_rejected() {
    let config = frontend::FrontendConfig::from_json_str(r#"{ "theme": "neon" }"#).unwrap();
    assert!(matches!(
        frontend::Frontend::new(config),
        Err(frontend::ConfigError::Render(_))
    ));
}
