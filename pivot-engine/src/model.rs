//! FILENAME: pivot-engine/src/model.rs
//! Table model - The renderer-independent output of the transformers.
//!
//! A table is three sections (header, body, footer) of rows of cells.
//! Cells carry a kind, spans and a content telling the renderer whether it
//! holds a dimension label, a member or a measure value.

use analytics_model::Value;

use crate::visitor::TableVisitor;

// ============================================================================
// CELL
// ============================================================================

/// The role of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Legends and members heading a row or column.
    Header,
    /// Measure values.
    Data,
    /// Subtotal labels and values.
    Footer,
}

/// What a cell shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Empty,
    /// A dimension or measure label (legend).
    Label(Value),
    /// A dimension member.
    Member(Value),
    /// A measure value.
    Value(Value),
}

impl Content {
    /// The wrapped value, `None` for empty cells.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Content::Empty => None,
            Content::Label(v) | Content::Member(v) | Content::Value(v) => Some(v),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    pub content: Content,
    pub column_span: usize,
    pub row_span: usize,
}

impl Cell {
    pub fn new(kind: CellKind, content: Content) -> Self {
        Cell {
            kind,
            content,
            column_span: 1,
            row_span: 1,
        }
    }

    pub fn header(content: Content) -> Self {
        Cell::new(CellKind::Header, content)
    }

    pub fn data(content: Content) -> Self {
        Cell::new(CellKind::Data, content)
    }

    pub fn footer(content: Content) -> Self {
        Cell::new(CellKind::Footer, content)
    }

    pub fn with_column_span(mut self, column_span: usize) -> Self {
        self.column_span = column_span.max(1);
        self
    }

    pub fn with_row_span(mut self, row_span: usize) -> Self {
        self.row_span = row_span.max(1);
        self
    }

    pub fn accept<V: TableVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self.kind {
            CellKind::Header => visitor.visit_header_cell(self),
            CellKind::Data => visitor.visit_data_cell(self),
            CellKind::Footer => visitor.visit_footer_cell(self),
        }
    }
}

// ============================================================================
// ROWS AND SECTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of columns covered, counting spans.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|c| c.column_span).sum()
    }

    pub fn accept<V: TableVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_row(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Body,
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    pub kind: SectionKind,
    pub rows: Vec<Row>,
}

impl TableSection {
    pub fn new(kind: SectionKind) -> Self {
        TableSection {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn accept<V: TableVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self.kind {
            SectionKind::Header => visitor.visit_table_header(self),
            SectionKind::Body => visitor.visit_table_body(self),
            SectionKind::Footer => visitor.visit_table_footer(self),
        }
    }
}

// ============================================================================
// TABLE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: TableSection,
    pub body: TableSection,
    pub footer: TableSection,
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Table {
            header: TableSection::new(SectionKind::Header),
            body: TableSection::new(SectionKind::Body),
            footer: TableSection::new(SectionKind::Footer),
        }
    }

    /// The non-empty sections in display order.
    pub fn sections(&self) -> impl Iterator<Item = &TableSection> {
        [&self.header, &self.body, &self.footer]
            .into_iter()
            .filter(|s| !s.is_empty())
    }

    pub fn accept<V: TableVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_table(self)
    }
}
