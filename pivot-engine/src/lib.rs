//! FILENAME: pivot-engine/src/lib.rs
//! Table layout for the analytics frontend.
//!
//! Layers:
//! - `model`: Renderer-independent table (sections, rows, cells)
//! - `visitor`: Traversal seam implemented by the HTML and spreadsheet renderers
//! - `axis`: Row and column hierarchies of a pivot table
//! - `transformer`: Result tree / cube to pivot table
//! - `flat`: Result table / cube cell to flat table

pub mod axis;
pub mod error;
pub mod flat;
pub mod model;
pub mod transformer;
pub mod visitor;

pub use error::PivotError;
pub use flat::{rows_from, CubeTableAdapter, ResultSetToTableTransformer};
pub use model::{Cell, CellKind, Content, Row, SectionKind, Table, TableSection};
pub use transformer::{
    HardcodedSubtotalDescriptionResolver, PivotTableTransformer, SubtotalDescriptionResolver,
};
pub use visitor::TableVisitor;
