//! FILENAME: spreadsheet/src/renderer.rs
//! PURPOSE: Cube cells and results to workbooks.

use analytics_model::{AnalyticsResult, CubeCell, FrontendError, VALUES_DIMENSION};
use formatter::Formatters;
use pivot_engine::{CubeTableAdapter, PivotTableTransformer, Table};
use rust_xlsxwriter::Workbook;

use crate::error::SpreadsheetError;
use crate::html::SpreadsheetHtmlVisitor;
use crate::xlsx_writer::WorksheetVisitor;

pub const SHEET_NAME: &str = "Pivot Table";

pub struct SpreadsheetRenderer {
    formatters: Formatters,
    transformer: PivotTableTransformer,
}

impl SpreadsheetRenderer {
    pub fn new(formatters: Formatters) -> Self {
        SpreadsheetRenderer {
            formatters,
            transformer: PivotTableTransformer::new(),
        }
    }

    /// One row per non-empty combination of `dimensions` below `cell`.
    /// An empty `measures` list exports every measure.
    pub fn render(
        &self,
        cell: &CubeCell<'_>,
        dimensions: &[String],
        measures: &[String],
    ) -> Result<Workbook, FrontendError> {
        self.flat_table(cell, dimensions, measures)
            .and_then(|table| self.write_workbook(&table))
            .map_err(FrontendError::wrap)
    }

    /// Pivot table with subtotals for every row and column dimension.
    pub fn render_pivot_table(
        &self,
        result: &AnalyticsResult,
        measures: &[String],
        rows: &[String],
        columns: &[String],
    ) -> Result<Workbook, FrontendError> {
        self.pivot_table(result, measures, rows, columns)
            .and_then(|table| self.write_workbook(&table))
            .map_err(FrontendError::wrap)
    }

    /// The flat export as spreadsheet-importable HTML.
    pub fn render_html(
        &self,
        cell: &CubeCell<'_>,
        dimensions: &[String],
        measures: &[String],
    ) -> Result<String, FrontendError> {
        let table = self
            .flat_table(cell, dimensions, measures)
            .map_err(FrontendError::wrap)?;
        Ok(self.to_html(&table))
    }

    /// The pivot export as spreadsheet-importable HTML.
    pub fn render_pivot_html(
        &self,
        result: &AnalyticsResult,
        measures: &[String],
        rows: &[String],
        columns: &[String],
    ) -> Result<String, FrontendError> {
        let table = self
            .pivot_table(result, measures, rows, columns)
            .map_err(FrontendError::wrap)?;
        Ok(self.to_html(&table))
    }

    fn flat_table(
        &self,
        cell: &CubeCell<'_>,
        dimensions: &[String],
        measures: &[String],
    ) -> Result<Table, SpreadsheetError> {
        Ok(CubeTableAdapter::transform(cell, dimensions, measures)?)
    }

    fn pivot_table(
        &self,
        result: &AnalyticsResult,
        measures: &[String],
        rows: &[String],
        columns: &[String],
    ) -> Result<Table, SpreadsheetError> {
        let cube = result.cube();
        let subtotals: Vec<String> = rows.iter().chain(columns.iter()).cloned().collect();
        let skip_legends = [VALUES_DIMENSION.to_string()];

        Ok(self
            .transformer
            .transform_cube(&cube, rows, columns, measures, &skip_legends, &subtotals)?)
    }

    fn to_html(&self, table: &Table) -> String {
        table.accept(&mut SpreadsheetHtmlVisitor::new(self.formatters.cellifier()))
    }

    fn write_workbook(&self, table: &Table) -> Result<Workbook, SpreadsheetError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let (rows, last_column) = {
            let mut visitor = WorksheetVisitor::new(worksheet, self.formatters.cellifier());
            table.accept(&mut visitor)?;
            (visitor.rows_written(), visitor.last_column())
        };

        if rows > 0 {
            worksheet.autofilter(0, 0, rows - 1, last_column)?;
        }
        worksheet.autofit();

        log::debug!("wrote {} rows to sheet '{}'", rows, SHEET_NAME);

        Ok(workbook)
    }
}
