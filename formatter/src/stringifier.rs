//! FILENAME: formatter/src/stringifier.rs
//! PURPOSE: Converts values to plain text.
//! CONTEXT: Each stringifier handles the value types it knows and returns
//! `None` for the rest, letting the chain try the next one.

use std::sync::Arc;

use analytics_model::{TranslatableMessage, Translator, Value};

use crate::number_format::{format_decimal, format_integer, NumberSymbols};

pub trait Stringifier: Send + Sync {
    fn stringify(&self, value: &Value) -> Option<String>;
}

/// Messages, nulls and booleans, resolved through the translator.
pub struct TranslatableStringifier {
    translator: Arc<dyn Translator>,
}

impl TranslatableStringifier {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        TranslatableStringifier { translator }
    }
}

impl Stringifier for TranslatableStringifier {
    fn stringify(&self, value: &Value) -> Option<String> {
        let message = match value {
            Value::Message(message) => return Some(self.translator.trans(message)),
            Value::Null => TranslatableMessage::new("(None)"),
            Value::Bool(true) => TranslatableMessage::new("True"),
            Value::Bool(false) => TranslatableMessage::new("False"),
            _ => return None,
        };
        Some(self.translator.trans(&message))
    }
}

/// Numbers in the locale's decimal style.
pub struct NumberFormatStringifier {
    symbols: NumberSymbols,
}

impl NumberFormatStringifier {
    pub fn new(locale: &str) -> Self {
        NumberFormatStringifier {
            symbols: NumberSymbols::for_locale(locale),
        }
    }
}

impl Stringifier for NumberFormatStringifier {
    fn stringify(&self, value: &Value) -> Option<String> {
        match value {
            Value::Int(i) => Some(format_integer(*i, self.symbols)),
            Value::Float(f) => Some(format_decimal(*f, self.symbols)),
            _ => None,
        }
    }
}

/// Coordinates have no textual form.
pub struct CoordinatesStringifier;

impl Stringifier for CoordinatesStringifier {
    fn stringify(&self, value: &Value) -> Option<String> {
        match value {
            Value::Coordinates(_) => Some(String::new()),
            _ => None,
        }
    }
}

pub struct DefaultStringifier;

impl Stringifier for DefaultStringifier {
    fn stringify(&self, value: &Value) -> Option<String> {
        match value {
            Value::Null => Some("-".to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Text(s) => Some(s.clone()),
            Value::Message(m) => Some(m.to_string()),
            Value::Sequence(s) => Some(s.label.clone()),
            Value::Custom(c) => Some(c.type_name().to_string()),
            Value::Coordinates(_) => None,
        }
    }
}

// ============================================================================
// CHAIN
// ============================================================================

pub struct ChainStringifier {
    stringifiers: Vec<Box<dyn Stringifier>>,
}

impl ChainStringifier {
    pub fn new(stringifiers: Vec<Box<dyn Stringifier>>) -> Self {
        ChainStringifier { stringifiers }
    }

    /// The built-in stringifiers, in priority order.
    pub fn defaults(translator: Arc<dyn Translator>) -> Vec<Box<dyn Stringifier>> {
        let locale = translator.locale().to_string();
        vec![
            Box::new(TranslatableStringifier::new(translator)),
            Box::new(NumberFormatStringifier::new(&locale)),
            Box::new(CoordinatesStringifier),
            Box::new(DefaultStringifier),
        ]
    }

    /// The first stringifier's result, or the value's type name when none
    /// handles it.
    pub fn to_text(&self, value: &Value) -> String {
        self.stringifiers
            .iter()
            .find_map(|s| s.stringify(value))
            .unwrap_or_else(|| value.type_name().to_string())
    }
}

impl Stringifier for ChainStringifier {
    fn stringify(&self, value: &Value) -> Option<String> {
        Some(self.to_text(value))
    }
}
