//! FILENAME: spreadsheet/src/lib.rs
//! Spreadsheet exports for the analytics frontend.
//!
//! Layers:
//! - `xlsx_writer`: Table model to an XLSX worksheet
//! - `html`: Table model to spreadsheet-importable HTML
//! - `renderer`: Cube cell / result to workbook

pub mod error;
pub mod html;
pub mod renderer;
pub mod xlsx_writer;

pub use error::SpreadsheetError;
pub use html::SpreadsheetHtmlVisitor;
pub use renderer::{SpreadsheetRenderer, SHEET_NAME};
pub use rust_xlsxwriter::Workbook;
pub use xlsx_writer::{save_xlsx, to_bytes, WorksheetVisitor};
