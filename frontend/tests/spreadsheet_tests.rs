//! FILENAME: frontend/tests/spreadsheet_tests.rs

mod common;

use calamine::{open_workbook, Data, Reader, Xlsx};
use common::*;
use spreadsheet::{save_xlsx, SHEET_NAME};
use tempfile::tempdir;

#[test]
fn test_render_spreadsheet_from_cube() {
    let cube = sales_by_region().cube();
    let mut workbook = frontend()
        .render_spreadsheet(&cube, &strings(&["region"]), &strings(&["revenue"]))
        .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("sales.xlsx");
    save_xlsx(&mut workbook, &path).unwrap();

    let mut xlsx: Xlsx<_> = open_workbook(&path).unwrap();
    let range = xlsx.worksheet_range(SHEET_NAME).unwrap();

    assert_eq!(range.get_value((0, 1)), Some(&Data::String("Revenue".into())));
    assert_eq!(range.get_value((3, 0)), Some(&Data::String("West".into())));
    assert_eq!(range.get_value((3, 1)), Some(&Data::Float(1500.5)));
}

#[test]
fn test_pivot_spreadsheet_translates_subtotals() {
    let frontend = frontend_with(r#"{ "locale": "de", "catalogs": { "de": { "Subtotal": "Summe" } } }"#);
    let mut workbook = frontend
        .render_pivot_spreadsheet(
            &sales_by_region_and_product(),
            &[],
            &strings(&["region", "product"]),
            &[],
        )
        .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("pivot.xlsx");
    save_xlsx(&mut workbook, &path).unwrap();

    let mut xlsx: Xlsx<_> = open_workbook(&path).unwrap();
    let range = xlsx.worksheet_range(SHEET_NAME).unwrap();

    let texts: Vec<String> = range
        .rows()
        .flat_map(|row| row.iter())
        .filter_map(|cell| match cell {
            Data::String(s) => Some(s.clone()),
            _ => None,
        })
        .collect();

    assert!(texts.iter().any(|t| t == "Summe"));
    assert!(texts.iter().any(|t| t == "Region"));
}

#[test]
fn test_unknown_dimension_gets_generic_error() {
    let cube = sales_by_region().cube();
    let error = frontend()
        .render_spreadsheet(&cube, &strings(&["year"]), &[])
        .err().unwrap();

    assert!(error.is_generic());
}
