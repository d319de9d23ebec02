//! FILENAME: analytics-model/src/lib.rs
//! Result and cube model shared by the chart, table and spreadsheet renderers.

pub mod aggregation;
pub mod cube;
pub mod error;
pub mod measure;
pub mod result;
pub mod translation;
pub mod tree;
pub mod value;

pub use aggregation::Aggregation;
pub use cube::{Cube, CubeCell};
pub use error::{FrontendError, ModelError, UserFacing};
pub use measure::{Measure, MeasureDescriptor, Measures, Unit};
pub use result::{AnalyticsResult, Dimension, ResultBuilder, ResultTable, Tuple, VALUES_DIMENSION};
pub use translation::{CatalogTranslator, NullTranslator, TranslatableMessage, Translator};
pub use tree::TreeNode;
pub use value::{Coordinates, CustomValue, SequenceMember, Value};
