//! FILENAME: pivot-engine/src/visitor.rs

use crate::model::{Cell, Row, Table, TableSection};

/// Walks a table. Implementations decide the traversal order by calling
/// `accept` on the children they want to visit.
pub trait TableVisitor {
    type Output;

    fn visit_table(&mut self, table: &Table) -> Self::Output;
    fn visit_table_header(&mut self, section: &TableSection) -> Self::Output;
    fn visit_table_body(&mut self, section: &TableSection) -> Self::Output;
    fn visit_table_footer(&mut self, section: &TableSection) -> Self::Output;
    fn visit_row(&mut self, row: &Row) -> Self::Output;
    fn visit_header_cell(&mut self, cell: &Cell) -> Self::Output;
    fn visit_data_cell(&mut self, cell: &Cell) -> Self::Output;
    fn visit_footer_cell(&mut self, cell: &Cell) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellKind, Content};
    use analytics_model::Value;

    /// Records the visiting order.
    struct Trace(Vec<String>);

    impl TableVisitor for Trace {
        type Output = ();

        fn visit_table(&mut self, table: &Table) {
            self.0.push("table".into());
            for section in table.sections() {
                section.accept(self);
            }
        }

        fn visit_table_header(&mut self, section: &TableSection) {
            self.0.push("thead".into());
            section.iter().for_each(|r| r.accept(self));
        }

        fn visit_table_body(&mut self, section: &TableSection) {
            self.0.push("tbody".into());
            section.iter().for_each(|r| r.accept(self));
        }

        fn visit_table_footer(&mut self, section: &TableSection) {
            self.0.push("tfoot".into());
            section.iter().for_each(|r| r.accept(self));
        }

        fn visit_row(&mut self, row: &Row) {
            self.0.push("tr".into());
            row.iter().for_each(|c| c.accept(self));
        }

        fn visit_header_cell(&mut self, _cell: &Cell) {
            self.0.push("th".into());
        }

        fn visit_data_cell(&mut self, _cell: &Cell) {
            self.0.push("td".into());
        }

        fn visit_footer_cell(&mut self, _cell: &Cell) {
            self.0.push("tf".into());
        }
    }

    #[test]
    fn accept_dispatches_on_kind() {
        let mut table = Table::new();
        table.header.rows.push(Row::new(vec![Cell::header(Content::Label(Value::text("Region")))]));
        table.body.rows.push(Row::new(vec![Cell::data(Content::Value(Value::Int(1)))]));
        table
            .body
            .rows
            .push(Row::new(vec![Cell::new(CellKind::Footer, Content::Empty)]));

        let mut trace = Trace(Vec::new());
        table.accept(&mut trace);

        assert_eq!(trace.0, vec!["table", "thead", "tr", "th", "tbody", "tr", "td", "tr", "tf"]);
    }
}
