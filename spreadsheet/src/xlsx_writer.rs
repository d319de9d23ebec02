//! FILENAME: spreadsheet/src/xlsx_writer.rs
//! PURPOSE: Writes a table model into a worksheet.
//! CONTEXT: Cells are placed left to right, skipping positions already
//! covered by a row span from a previous row. Spanning cells become merged
//! ranges whose top-left cell holds the typed value.

use std::path::Path;

use formatter::{CellProperties, CellType, ChainCellifier};
use pivot_engine::{Cell, CellKind, Row, Table, TableSection, TableVisitor};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use rustc_hash::FxHashSet;

use crate::error::SpreadsheetError;

pub struct WorksheetVisitor<'a> {
    worksheet: &'a mut Worksheet,
    cellifier: &'a ChainCellifier,
    row: u32,
    column: u16,
    last_column: u16,
    /// Positions covered by merged ranges.
    occupied: FxHashSet<(u32, u16)>,
}

impl<'a> WorksheetVisitor<'a> {
    pub fn new(worksheet: &'a mut Worksheet, cellifier: &'a ChainCellifier) -> Self {
        WorksheetVisitor {
            worksheet,
            cellifier,
            row: 0,
            column: 0,
            last_column: 0,
            occupied: FxHashSet::default(),
        }
    }

    /// Number of rows written so far.
    pub fn rows_written(&self) -> u32 {
        self.row
    }

    /// Right-most column written so far.
    pub fn last_column(&self) -> u16 {
        self.last_column
    }

    fn rows(&mut self, section: &TableSection) -> Result<(), SpreadsheetError> {
        for row in section.iter() {
            row.accept(self)?;
        }
        Ok(())
    }

    fn write_cell(&mut self, cell: &Cell, format: Format) -> Result<(), SpreadsheetError> {
        while self.occupied.contains(&(self.row, self.column)) {
            self.column += 1;
        }

        let (row, column) = (self.row, self.column);
        let properties = match cell.content.value() {
            Some(value) => self.cellifier.to_cell(value),
            None => CellProperties::null(),
        };
        let format = match &properties.format_code {
            Some(code) => format.set_num_format(code),
            None => format,
        };

        let last_row = row + cell.row_span.max(1) as u32 - 1;
        let last_column = column + cell.column_span.max(1) as u16 - 1;

        if last_row > row || last_column > column {
            self.worksheet
                .merge_range(row, column, last_row, last_column, "", &format)?;
            for r in row..=last_row {
                for c in column..=last_column {
                    self.occupied.insert((r, c));
                }
            }
        }

        write_value(self.worksheet, row, column, &properties, &format)?;

        self.column = last_column + 1;
        self.last_column = self.last_column.max(last_column);
        Ok(())
    }
}

fn write_value(
    worksheet: &mut Worksheet,
    row: u32,
    column: u16,
    properties: &CellProperties,
    format: &Format,
) -> Result<(), SpreadsheetError> {
    match properties.cell_type {
        CellType::Numeric => match properties.content.parse::<f64>() {
            Ok(number) => {
                worksheet.write_number_with_format(row, column, number, format)?;
            }
            Err(_) => {
                worksheet.write_string_with_format(row, column, &properties.content, format)?;
            }
        },
        CellType::Bool => {
            worksheet.write_boolean_with_format(row, column, properties.content == "1", format)?;
        }
        CellType::Null => {
            worksheet.write_blank(row, column, format)?;
        }
        CellType::String => {
            worksheet.write_string_with_format(row, column, &properties.content, format)?;
        }
    }
    Ok(())
}

impl TableVisitor for WorksheetVisitor<'_> {
    type Output = Result<(), SpreadsheetError>;

    fn visit_table(&mut self, table: &Table) -> Self::Output {
        for section in table.sections() {
            section.accept(self)?;
        }
        Ok(())
    }

    fn visit_table_header(&mut self, section: &TableSection) -> Self::Output {
        self.rows(section)
    }

    fn visit_table_body(&mut self, section: &TableSection) -> Self::Output {
        self.rows(section)
    }

    fn visit_table_footer(&mut self, section: &TableSection) -> Self::Output {
        self.rows(section)
    }

    fn visit_row(&mut self, row: &Row) -> Self::Output {
        self.column = 0;
        for cell in row.iter() {
            cell.accept(self)?;
        }
        self.row += 1;
        Ok(())
    }

    fn visit_header_cell(&mut self, cell: &Cell) -> Self::Output {
        self.write_cell(cell, cell_format(CellKind::Header))
    }

    fn visit_data_cell(&mut self, cell: &Cell) -> Self::Output {
        self.write_cell(cell, cell_format(CellKind::Data))
    }

    fn visit_footer_cell(&mut self, cell: &Cell) -> Self::Output {
        self.write_cell(cell, cell_format(CellKind::Footer))
    }
}

fn cell_format(kind: CellKind) -> Format {
    match kind {
        CellKind::Header => Format::new().set_bold(),
        CellKind::Data => Format::new(),
        CellKind::Footer => Format::new().set_italic(),
    }
}

pub fn save_xlsx(workbook: &mut Workbook, path: &Path) -> Result<(), SpreadsheetError> {
    workbook.save(path)?;
    Ok(())
}

pub fn to_bytes(workbook: &mut Workbook) -> Result<Vec<u8>, SpreadsheetError> {
    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use analytics_model::{NullTranslator, Value};
    use formatter::Formatters;
    use pivot_engine::Content;

    #[test]
    fn test_spans_advance_and_reserve_positions() {
        let mut table = Table::new();
        table.header.rows.push(Row::new(vec![
            Cell::header(Content::Label(Value::text("Region"))).with_row_span(2),
            Cell::header(Content::Label(Value::text("Sales"))).with_column_span(2),
        ]));
        table.header.rows.push(Row::new(vec![
            Cell::header(Content::Member(Value::text("2023"))),
            Cell::header(Content::Member(Value::text("2024"))),
        ]));
        table.body.rows.push(Row::new(vec![
            Cell::header(Content::Member(Value::text("North"))),
            Cell::data(Content::Value(Value::Int(1))),
            Cell::data(Content::Value(Value::Float(2.5))),
        ]));

        let formatters = Formatters::new(Arc::new(NullTranslator::default()));
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let mut visitor = WorksheetVisitor::new(worksheet, formatters.cellifier());
        table.accept(&mut visitor).unwrap();

        assert_eq!(visitor.rows_written(), 3);
        assert_eq!(visitor.last_column(), 2);
        assert!(visitor.occupied.contains(&(1, 0)));
        assert!(visitor.occupied.contains(&(0, 2)));
    }
}
