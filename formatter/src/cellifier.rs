//! FILENAME: formatter/src/cellifier.rs
//! PURPOSE: Converts values to typed spreadsheet cells.
//! CONTEXT: The result is written either directly to a workbook or as
//! `data-type` / `data-format` attributes in spreadsheet-importable HTML.

use std::sync::Arc;

use analytics_model::Value;

use crate::stringifier::ChainStringifier;

/// Spreadsheet data type of a cell. The codes follow the HTML importers'
/// `data-type` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    String,
    Numeric,
    Bool,
    Null,
}

impl CellType {
    pub fn code(&self) -> &'static str {
        match self {
            CellType::String => "s",
            CellType::Numeric => "n",
            CellType::Bool => "b",
            CellType::Null => "null",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellProperties {
    pub content: String,
    pub cell_type: CellType,
    pub format_code: Option<String>,
}

impl CellProperties {
    pub fn new(content: impl Into<String>, cell_type: CellType) -> Self {
        CellProperties {
            content: content.into(),
            cell_type,
            format_code: None,
        }
    }

    pub fn with_format_code(mut self, format_code: impl Into<String>) -> Self {
        self.format_code = Some(format_code.into());
        self
    }

    pub fn null() -> Self {
        CellProperties::new("", CellType::Null)
    }

    /// (attribute, value) pairs, `data-format` only when a format is set.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        let mut attributes = vec![("data-type", self.cell_type.code())];
        if let Some(format_code) = &self.format_code {
            attributes.push(("data-format", format_code.as_str()));
        }
        attributes
    }

    /// The attributes rendered for an HTML tag, values escaped.
    pub fn html_attributes(&self) -> String {
        self.attributes()
            .into_iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, html_escape::encode_double_quoted_attribute(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub trait Cellifier: Send + Sync {
    fn cellify(&self, value: &Value) -> Option<CellProperties>;
}

/// Nulls and booleans.
pub struct DefaultCellifier;

impl Cellifier for DefaultCellifier {
    fn cellify(&self, value: &Value) -> Option<CellProperties> {
        match value {
            Value::Null => Some(CellProperties::null()),
            Value::Bool(true) => Some(CellProperties::new("1", CellType::Bool)),
            Value::Bool(false) => Some(CellProperties::new("0", CellType::Bool)),
            _ => None,
        }
    }
}

/// Numbers as numeric cells.
pub struct NumberCellifier;

impl NumberCellifier {
    pub const INTEGER_FORMAT: &'static str = "0";
    pub const DECIMAL_FORMAT: &'static str = "#,##0.00";
}

impl Cellifier for NumberCellifier {
    fn cellify(&self, value: &Value) -> Option<CellProperties> {
        match value {
            Value::Int(i) => Some(
                CellProperties::new(i.to_string(), CellType::Numeric).with_format_code(Self::INTEGER_FORMAT),
            ),
            Value::Float(f) if f.is_finite() => Some(
                CellProperties::new(f.to_string(), CellType::Numeric).with_format_code(Self::DECIMAL_FORMAT),
            ),
            _ => None,
        }
    }
}

pub struct ChainCellifier {
    cellifiers: Vec<Box<dyn Cellifier>>,
    stringifier: Arc<ChainStringifier>,
}

impl ChainCellifier {
    pub fn new(cellifiers: Vec<Box<dyn Cellifier>>, stringifier: Arc<ChainStringifier>) -> Self {
        ChainCellifier {
            cellifiers,
            stringifier,
        }
    }

    pub fn defaults() -> Vec<Box<dyn Cellifier>> {
        vec![Box::new(DefaultCellifier), Box::new(NumberCellifier)]
    }

    /// The first cellifier's result, or a string cell with the stringified
    /// value.
    pub fn to_cell(&self, value: &Value) -> CellProperties {
        self.cellifiers
            .iter()
            .find_map(|c| c.cellify(value))
            .unwrap_or_else(|| CellProperties::new(self.stringifier.to_text(value), CellType::String))
    }
}

impl Cellifier for ChainCellifier {
    fn cellify(&self, value: &Value) -> Option<CellProperties> {
        Some(self.to_cell(value))
    }
}
