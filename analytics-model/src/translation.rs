//! FILENAME: analytics-model/src/translation.rs
//! PURPOSE: Translatable messages and the translator seam.
//! CONTEXT: Labels, legends and error messages are produced as message ids
//! and resolved against the caller's locale at render time.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A message id plus parameters, resolved later by a `Translator`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslatableMessage {
    id: String,
    #[serde(default)]
    parameters: BTreeMap<String, String>,
}

impl TranslatableMessage {
    pub fn new(id: impl Into<String>) -> Self {
        TranslatableMessage {
            id: id.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a parameter. The key is replaced verbatim, e.g. `{name}`.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Substitutes the parameters into `template`.
    pub fn interpolate(&self, template: &str) -> String {
        self.parameters
            .iter()
            .fold(template.to_string(), |acc, (key, value)| acc.replace(key.as_str(), value))
    }
}

impl fmt::Display for TranslatableMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.interpolate(&self.id))
    }
}

// ============================================================================
// TRANSLATORS
// ============================================================================

pub trait Translator: Send + Sync {
    /// The active locale, e.g. "en" or "id_ID".
    fn locale(&self) -> &str;

    fn trans(&self, message: &TranslatableMessage) -> String;
}

/// Returns message ids as-is (with parameters substituted).
#[derive(Debug, Clone)]
pub struct NullTranslator {
    locale: String,
}

impl NullTranslator {
    pub fn new(locale: impl Into<String>) -> Self {
        NullTranslator {
            locale: locale.into(),
        }
    }
}

impl Default for NullTranslator {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Translator for NullTranslator {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn trans(&self, message: &TranslatableMessage) -> String {
        message.to_string()
    }
}

/// Translator backed by in-memory catalogues: locale -> (message id -> text).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogTranslator {
    locale: String,
    #[serde(default)]
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
    pub fn new(locale: impl Into<String>) -> Self {
        CatalogTranslator {
            locale: locale.into(),
            catalogs: HashMap::new(),
        }
    }

    pub fn with_catalogs(
        locale: impl Into<String>,
        catalogs: HashMap<String, HashMap<String, String>>,
    ) -> Self {
        CatalogTranslator {
            locale: locale.into(),
            catalogs,
        }
    }

    pub fn add(&mut self, locale: &str, id: impl Into<String>, text: impl Into<String>) {
        self.catalogs
            .entry(locale.to_string())
            .or_default()
            .insert(id.into(), text.into());
    }

    /// Looks up the exact locale first, then its language part ("id_ID" -> "id").
    fn lookup(&self, id: &str) -> Option<&str> {
        let language = self
            .locale
            .split(|c: char| c == '_' || c == '-')
            .next()
            .unwrap_or(&self.locale);

        [self.locale.as_str(), language]
            .iter()
            .filter_map(|locale| self.catalogs.get(*locale))
            .find_map(|catalog| catalog.get(id))
            .map(String::as_str)
    }
}

impl Translator for CatalogTranslator {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn trans(&self, message: &TranslatableMessage) -> String {
        match self.lookup(message.id()) {
            Some(template) => message.interpolate(template),
            None => message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_translator_interpolates_parameters() {
        let message = TranslatableMessage::new("Measure {name} not found")
            .with_parameter("{name}", "revenue");

        assert_eq!(
            NullTranslator::default().trans(&message),
            "Measure revenue not found"
        );
    }

    #[test]
    fn catalog_translator_falls_back_to_language() {
        let mut translator = CatalogTranslator::new("id_ID");
        translator.add("id", "Subtotal", "Subtotal");
        translator.add("id", "True", "Benar");

        assert_eq!(translator.trans(&TranslatableMessage::new("True")), "Benar");
        assert_eq!(translator.trans(&TranslatableMessage::new("False")), "False");
    }

    #[test]
    fn catalog_translator_deserializes_from_json() {
        let json = r#"{
            "locale": "de",
            "catalogs": { "de": { "(None)": "(Keine)" } }
        }"#;

        let translator: CatalogTranslator = serde_json::from_str(json).unwrap();
        assert_eq!(translator.locale(), "de");
        assert_eq!(translator.trans(&TranslatableMessage::new("(None)")), "(Keine)");
    }
}
