//! FILENAME: analytics-model/src/measure.rs
//! PURPOSE: Measures, units and the descriptors used to roll measures up.

use crate::aggregation::Aggregation;
use crate::value::Value;

/// Unit of a measure. Measures can share an axis only when their
/// signatures are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub label: Value,
    pub signature: String,
}

impl Unit {
    pub fn new(label: impl Into<Value>, signature: impl Into<String>) -> Self {
        Unit {
            label: label.into(),
            signature: signature.into(),
        }
    }

    /// A unit whose symbol doubles as its signature, e.g. "kg".
    pub fn symbol(symbol: &str) -> Self {
        Unit::new(symbol, symbol)
    }

    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        self.signature == other.signature
    }
}

/// A named numeric metric with an optional unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub name: String,
    pub label: Value,
    pub value: Value,
    pub unit: Option<Unit>,
}

impl Measure {
    pub fn new(name: impl Into<String>, label: impl Into<Value>, value: impl Into<Value>) -> Self {
        Measure {
            name: name.into(),
            label: label.into(),
            value: value.into(),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }
}

/// Ordered measures of a tuple or cube cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measures {
    items: Vec<Measure>,
}

impl Measures {
    pub fn new(items: Vec<Measure>) -> Self {
        Measures { items }
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Measure> {
        self.items.iter().find(|m| m.name == name)
    }

    pub fn get_by_index(&self, index: usize) -> Option<&Measure> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Measure> {
        self.items.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|m| m.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, measure: Measure) {
        self.items.push(measure);
    }
}

impl FromIterator<Measure> for Measures {
    fn from_iter<I: IntoIterator<Item = Measure>>(iter: I) -> Self {
        Measures {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Measures {
    type Item = &'a Measure;
    type IntoIter = std::slice::Iter<'a, Measure>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Static description of a measure: everything except its value.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureDescriptor {
    pub name: String,
    pub label: Value,
    pub unit: Option<Unit>,
    /// How the measure rolls up into subtotals.
    pub aggregation: Aggregation,
}

impl MeasureDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<Value>) -> Self {
        MeasureDescriptor {
            name: name.into(),
            label: label.into(),
            unit: None,
            aggregation: Aggregation::default(),
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Instantiates the measure with a concrete value.
    pub fn measure(&self, value: Value) -> Measure {
        Measure {
            name: self.name.clone(),
            label: self.label.clone(),
            value,
            unit: self.unit.clone(),
        }
    }
}

impl From<&Measure> for MeasureDescriptor {
    fn from(measure: &Measure) -> Self {
        MeasureDescriptor {
            name: measure.name.clone(),
            label: measure.label.clone(),
            unit: measure.unit.clone(),
            aggregation: Aggregation::default(),
        }
    }
}
