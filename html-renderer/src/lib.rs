//! FILENAME: html-renderer/src/lib.rs
//! HTML tables for the analytics frontend.
//!
//! Layers:
//! - `theme`: Markup blocks (plain, Bootstrap 5)
//! - `visitor`: Table model to HTML
//! - `renderer`: Result to pivot or flat table, errors wrapped for display

pub mod error;
pub mod renderer;
pub mod theme;
pub mod visitor;

pub use error::RenderError;
pub use renderer::{OutputType, TableRenderer};
pub use theme::{theme_by_name, Bootstrap5Theme, PlainTheme, Theme};
pub use visitor::{span_attributes, HtmlRendererVisitor};
