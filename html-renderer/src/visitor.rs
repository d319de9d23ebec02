//! FILENAME: html-renderer/src/visitor.rs

use formatter::ChainHtmlifier;
use pivot_engine::{Cell, Content, Row, Table, TableSection, TableVisitor};

use crate::theme::Theme;

/// Renders a table to HTML through a theme.
pub struct HtmlRendererVisitor<'a> {
    theme: &'a dyn Theme,
    htmlifier: &'a ChainHtmlifier,
}

impl<'a> HtmlRendererVisitor<'a> {
    pub fn new(theme: &'a dyn Theme, htmlifier: &'a ChainHtmlifier) -> Self {
        HtmlRendererVisitor { theme, htmlifier }
    }

    fn rows(&mut self, section: &TableSection) -> String {
        section.iter().map(|row| row.accept(self)).collect()
    }

    fn content(&self, content: &Content) -> String {
        match content {
            Content::Empty => String::new(),
            Content::Label(v) => self.theme.label(&self.htmlifier.to_html(v)),
            Content::Member(v) => self.theme.member(&self.htmlifier.to_html(v)),
            Content::Value(v) => self.theme.value(&self.htmlifier.to_html(v)),
        }
    }
}

/// `colspan` / `rowspan` attributes, only for spans above one.
pub fn span_attributes(cell: &Cell) -> String {
    let mut attributes = String::new();
    if cell.column_span > 1 {
        attributes.push_str(&format!(" colspan=\"{}\"", cell.column_span));
    }
    if cell.row_span > 1 {
        attributes.push_str(&format!(" rowspan=\"{}\"", cell.row_span));
    }
    attributes
}

impl TableVisitor for HtmlRendererVisitor<'_> {
    type Output = String;

    fn visit_table(&mut self, table: &Table) -> String {
        let sections: String = table.sections().map(|section| section.accept(self)).collect();
        self.theme.table(&sections)
    }

    fn visit_table_header(&mut self, section: &TableSection) -> String {
        let rows = self.rows(section);
        self.theme.thead(&rows)
    }

    fn visit_table_body(&mut self, section: &TableSection) -> String {
        let rows = self.rows(section);
        self.theme.tbody(&rows)
    }

    fn visit_table_footer(&mut self, section: &TableSection) -> String {
        let rows = self.rows(section);
        self.theme.tfoot(&rows)
    }

    fn visit_row(&mut self, row: &Row) -> String {
        let cells: String = row.iter().map(|cell| cell.accept(self)).collect();
        self.theme.tr(&cells)
    }

    fn visit_header_cell(&mut self, cell: &Cell) -> String {
        self.theme.th(&self.content(&cell.content), &span_attributes(cell))
    }

    fn visit_data_cell(&mut self, cell: &Cell) -> String {
        self.theme.td(&self.content(&cell.content), &span_attributes(cell))
    }

    fn visit_footer_cell(&mut self, cell: &Cell) -> String {
        self.theme.tf(&self.content(&cell.content), &span_attributes(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use analytics_model::{NullTranslator, Value};
    use formatter::Formatters;

    use crate::theme::PlainTheme;

    #[test]
    fn test_renders_sections_and_spans() {
        let mut table = Table::new();
        table.header.rows.push(Row::new(vec![
            Cell::header(Content::Label(Value::text("Region"))).with_column_span(2),
        ]));
        table.body.rows.push(Row::new(vec![
            Cell::header(Content::Member(Value::text("North"))).with_row_span(2),
            Cell::data(Content::Value(Value::Int(1200))),
        ]));
        table.footer.rows.push(Row::new(vec![Cell::footer(Content::Empty)]));

        let formatters = Formatters::new(Arc::new(NullTranslator::default()));
        let theme = PlainTheme;
        let mut visitor = HtmlRendererVisitor::new(&theme, formatters.htmlifier());
        let html = table.accept(&mut visitor);

        assert_eq!(
            html,
            "<table><thead><tr><th colspan=\"2\">Region</th></tr></thead>\
             <tbody><tr><th rowspan=\"2\">North</th><td>1,200</td></tr></tbody>\
             <tfoot><tr><td class=\"subtotal\"></td></tr></tfoot></table>"
        );
    }

    #[test]
    fn test_content_is_escaped() {
        let mut table = Table::new();
        table
            .body
            .rows
            .push(Row::new(vec![Cell::data(Content::Member(Value::text("<script>")))]));

        let formatters = Formatters::new(Arc::new(NullTranslator::default()));
        let theme = PlainTheme;
        let html = table.accept(&mut HtmlRendererVisitor::new(&theme, formatters.htmlifier()));

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
