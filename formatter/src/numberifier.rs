//! FILENAME: formatter/src/numberifier.rs
//! PURPOSE: Converts values to numbers for charts.

use analytics_model::Value;

use crate::error::FormatterError;

pub trait Numberifier: Send + Sync {
    fn numberify(&self, value: &Value) -> Option<f64>;
}

/// Coordinates count as zero.
pub struct CoordinatesNumberifier;

impl Numberifier for CoordinatesNumberifier {
    fn numberify(&self, value: &Value) -> Option<f64> {
        match value {
            Value::Coordinates(_) => Some(0.0),
            _ => None,
        }
    }
}

pub struct DefaultNumberifier;

impl Numberifier for DefaultNumberifier {
    fn numberify(&self, value: &Value) -> Option<f64> {
        match value {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Null => Some(0.0),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Sequence(s) => Some(s.ordinal as f64),
            _ => None,
        }
    }
}

pub struct ChainNumberifier {
    numberifiers: Vec<Box<dyn Numberifier>>,
}

impl ChainNumberifier {
    pub fn new(numberifiers: Vec<Box<dyn Numberifier>>) -> Self {
        ChainNumberifier { numberifiers }
    }

    pub fn defaults() -> Vec<Box<dyn Numberifier>> {
        vec![Box::new(CoordinatesNumberifier), Box::new(DefaultNumberifier)]
    }

    pub fn to_number(&self, value: &Value) -> Result<f64, FormatterError> {
        self.numberifiers
            .iter()
            .find_map(|n| n.numberify(value))
            .ok_or_else(|| FormatterError::Unconvertible(value.type_name().to_string()))
    }
}

impl Numberifier for ChainNumberifier {
    fn numberify(&self, value: &Value) -> Option<f64> {
        self.to_number(value).ok()
    }
}
