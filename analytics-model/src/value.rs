//! FILENAME: analytics-model/src/value.rs
//! PURPOSE: The dynamically typed value carried by members, labels and measures.
//! CONTEXT: Query results mix plain scalars, translatable messages, ordered
//! sequence members and application objects. Formatters dispatch on the
//! variant to decide how each one is presented.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::translation::TranslatableMessage;

// ============================================================================
// SEQUENCE MEMBER
// ============================================================================

/// A member of an ordered sequence (months, days, years...).
/// Only members of the same `kind` can be compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceMember {
    /// Sequence family, e.g. "month" or "year".
    pub kind: String,
    /// Position of the member inside its sequence.
    pub ordinal: i64,
    /// Display text.
    pub label: String,
}

impl SequenceMember {
    pub fn new(kind: impl Into<String>, ordinal: i64, label: impl Into<String>) -> Self {
        SequenceMember {
            kind: kind.into(),
            ordinal,
            label: label.into(),
        }
    }

    /// Returns `None` when the members belong to different sequences.
    pub fn compare(&self, other: &SequenceMember) -> Option<Ordering> {
        if self.kind != other.kind {
            return None;
        }
        Some(self.ordinal.cmp(&other.ordinal))
    }
}

// ============================================================================
// CUSTOM VALUE
// ============================================================================

/// An application-specific object. Identity is by pointer, like an object id.
#[derive(Clone)]
pub struct CustomValue {
    type_name: String,
    inner: Arc<dyn Any + Send + Sync>,
}

impl CustomValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        CustomValue {
            type_name: std::any::type_name::<T>().to_string(),
            inner: Arc::new(value),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    fn identity(&self) -> String {
        format!("{}@{:p}", self.type_name, Arc::as_ptr(&self.inner))
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomValue({})", self.type_name)
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// ============================================================================
// COORDINATES
// ============================================================================

/// The position of a cell inside the cube: ordered (dimension, member) pairs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coordinates {
    entries: Vec<(String, Value)>,
}

impl Coordinates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `dimension` set to `member`, replacing any previous member.
    pub fn with(&self, dimension: impl Into<String>, member: Value) -> Self {
        let dimension = dimension.into();
        let mut entries: Vec<(String, Value)> = self
            .entries
            .iter()
            .filter(|(name, _)| *name != dimension)
            .cloned()
            .collect();
        entries.push((dimension, member));
        Coordinates { entries }
    }

    pub fn get(&self, dimension: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == dimension)
            .map(|(_, member)| member)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Order-independent identity of the coordinate set.
    pub fn signature(&self) -> String {
        let mut parts: Vec<String> = self
            .entries
            .iter()
            .map(|(name, member)| format!("{}={}", name, member.signature()))
            .collect();
        parts.sort();
        parts.join(";")
    }
}

impl FromIterator<(String, Value)> for Coordinates {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Coordinates::new(), |acc, (name, member)| acc.with(name, member))
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// Anything a result can hold as a member, a label or a measure value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Message(TranslatableMessage),
    Sequence(SequenceMember),
    Coordinates(Coordinates),
    Custom(CustomValue),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// A translatable message without parameters.
    pub fn message(id: impl Into<String>) -> Self {
        Value::Message(TranslatableMessage::new(id))
    }

    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Value::Custom(CustomValue::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of plain numbers. Everything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&SequenceMember> {
        match self {
            Value::Sequence(member) => Some(member),
            _ => None,
        }
    }

    /// Debug type name, used as the last-resort string representation.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "string",
            Value::Message(_) => "message",
            Value::Sequence(_) => "sequence",
            Value::Coordinates(_) => "coordinates",
            Value::Custom(custom) => custom.type_name(),
        }
    }

    /// Stable identity used to de-duplicate members and key lookups.
    pub fn signature(&self) -> String {
        match self {
            Value::Null => "n".to_string(),
            Value::Bool(b) => format!("b:{}", b),
            Value::Int(i) => format!("i:{}", i),
            Value::Float(f) => format!("f:{}", f.to_bits()),
            Value::Text(s) => format!("s:{}", s),
            Value::Message(m) => format!("m:{}", m),
            Value::Sequence(s) => format!("q:{}:{}", s.kind, s.ordinal),
            Value::Coordinates(c) => format!("c:{}", c.signature()),
            Value::Custom(c) => format!("o:{}", c.identity()),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<SequenceMember> for Value {
    fn from(value: SequenceMember) -> Self {
        Value::Sequence(value)
    }
}

impl From<TranslatableMessage> for Value {
    fn from(value: TranslatableMessage) -> Self {
        Value::Message(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_members_of_different_kinds_do_not_compare() {
        let jan = SequenceMember::new("month", 1, "January");
        let feb = SequenceMember::new("month", 2, "February");
        let y2024 = SequenceMember::new("year", 2024, "2024");

        assert_eq!(jan.compare(&feb), Some(Ordering::Less));
        assert_eq!(feb.compare(&jan), Some(Ordering::Greater));
        assert_eq!(jan.compare(&y2024), None);
    }

    #[test]
    fn signatures_distinguish_types() {
        assert_ne!(Value::Int(1).signature(), Value::Float(1.0).signature());
        assert_ne!(Value::text("1").signature(), Value::Int(1).signature());
        assert_eq!(Value::text("a").signature(), Value::from("a").signature());
    }

    #[test]
    fn custom_values_compare_by_identity() {
        #[derive(Debug)]
        struct Country(&'static str);

        let a = Value::custom(Country("ID"));
        let b = a.clone();
        let c = Value::custom(Country("ID"));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.signature(), b.signature());
        assert_ne!(a.signature(), c.signature());

        if let Value::Custom(custom) = &a {
            assert_eq!(custom.downcast_ref::<Country>().map(|c| c.0), Some("ID"));
            assert!(custom.type_name().ends_with("Country"));
        } else {
            panic!("Expected custom value");
        }
    }

    #[test]
    fn coordinates_signature_is_order_independent() {
        let a = Coordinates::new()
            .with("region", Value::from("North"))
            .with("year", Value::Int(2024));
        let b = Coordinates::new()
            .with("year", Value::Int(2024))
            .with("region", Value::from("North"));

        assert_eq!(a.signature(), b.signature());
        assert_eq!(a.get("region"), Some(&Value::from("North")));
    }

    #[test]
    fn coordinates_with_replaces_existing_member() {
        let coords = Coordinates::new()
            .with("region", Value::from("North"))
            .with("region", Value::from("South"));

        assert_eq!(coords.len(), 1);
        assert_eq!(coords.get("region"), Some(&Value::from("South")));
    }
}
