//! FILENAME: chart-engine/src/lib.rs
//! Chart.js-compatible chart configurations from analytics results.

pub mod chart;
pub mod color;
pub mod configuration;
pub mod error;
pub mod generator;

pub use chart::{Chart, ChartData, ChartKind, ChartType, Dataset, Paint};
pub use color::{Color, ColorDispenser};
pub use configuration::{ChartArea, ChartConfiguration, ChartLabelFont};
pub use error::ChartError;
pub use generator::{is_sequential, select_measures, ChartBuilder, ChartGenerator, DefaultChartGenerator};
