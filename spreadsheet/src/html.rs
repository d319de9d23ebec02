//! FILENAME: spreadsheet/src/html.rs
//! PURPOSE: HTML that spreadsheet importers read with cell types intact.
//! CONTEXT: Each cell carries the cellifier's `data-type` and
//! `data-format` attributes. Header text is bold, subtotal text italic.

use formatter::{CellProperties, ChainCellifier};
use pivot_engine::{Cell, Row, Table, TableSection, TableVisitor};

pub struct SpreadsheetHtmlVisitor<'a> {
    cellifier: &'a ChainCellifier,
}

impl<'a> SpreadsheetHtmlVisitor<'a> {
    pub fn new(cellifier: &'a ChainCellifier) -> Self {
        SpreadsheetHtmlVisitor { cellifier }
    }

    fn rows(&mut self, section: &TableSection) -> String {
        section.iter().map(|row| row.accept(self)).collect()
    }

    fn cell(&self, tag: &str, cell: &Cell, wrap: Option<&str>) -> String {
        let properties = match cell.content.value() {
            Some(value) => self.cellifier.to_cell(value),
            None => CellProperties::null(),
        };

        let mut attributes = String::new();
        if cell.column_span > 1 {
            attributes.push_str(&format!(" colspan=\"{}\"", cell.column_span));
        }
        if cell.row_span > 1 {
            attributes.push_str(&format!(" rowspan=\"{}\"", cell.row_span));
        }
        attributes.push(' ');
        attributes.push_str(&properties.html_attributes());

        let content = html_escape::encode_text(&properties.content);
        match wrap {
            Some(inline) if !content.is_empty() => {
                format!("<{tag}{attributes}><{inline}>{content}</{inline}></{tag}>")
            }
            _ => format!("<{tag}{attributes}>{content}</{tag}>"),
        }
    }
}

impl TableVisitor for SpreadsheetHtmlVisitor<'_> {
    type Output = String;

    fn visit_table(&mut self, table: &Table) -> String {
        let sections: String = table.sections().map(|section| section.accept(self)).collect();
        format!("<table>{}</table>", sections)
    }

    fn visit_table_header(&mut self, section: &TableSection) -> String {
        format!("<thead>{}</thead>", self.rows(section))
    }

    fn visit_table_body(&mut self, section: &TableSection) -> String {
        format!("<tbody>{}</tbody>", self.rows(section))
    }

    fn visit_table_footer(&mut self, section: &TableSection) -> String {
        format!("<tfoot>{}</tfoot>", self.rows(section))
    }

    fn visit_row(&mut self, row: &Row) -> String {
        let cells: String = row.iter().map(|cell| cell.accept(self)).collect();
        format!("<tr>{}</tr>", cells)
    }

    fn visit_header_cell(&mut self, cell: &Cell) -> String {
        self.cell("th", cell, Some("b"))
    }

    fn visit_data_cell(&mut self, cell: &Cell) -> String {
        self.cell("td", cell, None)
    }

    fn visit_footer_cell(&mut self, cell: &Cell) -> String {
        self.cell("td", cell, Some("i"))
    }
}
