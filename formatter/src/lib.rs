//! FILENAME: formatter/src/lib.rs
//! PURPOSE: Chains of responsibility turning analytics values into text,
//! numbers, spreadsheet cells and HTML.
//! CONTEXT: Applications prepend their own converters to support custom
//! value types; the built-in converters close each chain.

pub mod cellifier;
pub mod error;
pub mod htmlifier;
pub mod number_format;
pub mod numberifier;
pub mod stringifier;

use std::sync::Arc;

use analytics_model::Translator;

pub use cellifier::{CellProperties, CellType, Cellifier, ChainCellifier, DefaultCellifier, NumberCellifier};
pub use error::FormatterError;
pub use htmlifier::{ChainHtmlifier, Htmlifier};
pub use number_format::NumberSymbols;
pub use numberifier::{ChainNumberifier, CoordinatesNumberifier, DefaultNumberifier, Numberifier};
pub use stringifier::{
    ChainStringifier, CoordinatesStringifier, DefaultStringifier, NumberFormatStringifier, Stringifier,
    TranslatableStringifier,
};

/// The four formatter chains, sharing one stringifier.
#[derive(Clone)]
pub struct Formatters {
    translator: Arc<dyn Translator>,
    stringifier: Arc<ChainStringifier>,
    numberifier: Arc<ChainNumberifier>,
    cellifier: Arc<ChainCellifier>,
    htmlifier: Arc<ChainHtmlifier>,
}

impl Formatters {
    /// The built-in chains.
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        FormattersBuilder::new(translator).build()
    }

    pub fn builder(translator: Arc<dyn Translator>) -> FormattersBuilder {
        FormattersBuilder::new(translator)
    }

    pub fn translator(&self) -> &Arc<dyn Translator> {
        &self.translator
    }

    pub fn stringifier(&self) -> &ChainStringifier {
        &self.stringifier
    }

    pub fn numberifier(&self) -> &ChainNumberifier {
        &self.numberifier
    }

    pub fn cellifier(&self) -> &ChainCellifier {
        &self.cellifier
    }

    pub fn htmlifier(&self) -> &ChainHtmlifier {
        &self.htmlifier
    }
}

/// Collects custom converters, which run before the built-in ones in the
/// order they are added.
pub struct FormattersBuilder {
    translator: Arc<dyn Translator>,
    stringifiers: Vec<Box<dyn Stringifier>>,
    numberifiers: Vec<Box<dyn Numberifier>>,
    cellifiers: Vec<Box<dyn Cellifier>>,
    htmlifiers: Vec<Box<dyn Htmlifier>>,
}

impl FormattersBuilder {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        FormattersBuilder {
            translator,
            stringifiers: Vec::new(),
            numberifiers: Vec::new(),
            cellifiers: Vec::new(),
            htmlifiers: Vec::new(),
        }
    }

    pub fn stringifier(mut self, stringifier: impl Stringifier + 'static) -> Self {
        self.stringifiers.push(Box::new(stringifier));
        self
    }

    pub fn numberifier(mut self, numberifier: impl Numberifier + 'static) -> Self {
        self.numberifiers.push(Box::new(numberifier));
        self
    }

    pub fn cellifier(mut self, cellifier: impl Cellifier + 'static) -> Self {
        self.cellifiers.push(Box::new(cellifier));
        self
    }

    pub fn htmlifier(mut self, htmlifier: impl Htmlifier + 'static) -> Self {
        self.htmlifiers.push(Box::new(htmlifier));
        self
    }

    pub fn build(self) -> Formatters {
        let mut stringifiers = self.stringifiers;
        stringifiers.extend(ChainStringifier::defaults(self.translator.clone()));
        let stringifier = Arc::new(ChainStringifier::new(stringifiers));

        let mut numberifiers = self.numberifiers;
        numberifiers.extend(ChainNumberifier::defaults());

        let mut cellifiers = self.cellifiers;
        cellifiers.extend(ChainCellifier::defaults());

        log::debug!(
            "formatter chains built for locale '{}'",
            self.translator.locale()
        );

        Formatters {
            numberifier: Arc::new(ChainNumberifier::new(numberifiers)),
            cellifier: Arc::new(ChainCellifier::new(cellifiers, stringifier.clone())),
            htmlifier: Arc::new(ChainHtmlifier::new(self.htmlifiers, stringifier.clone())),
            stringifier,
            translator: self.translator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_model::{NullTranslator, Value};

    #[derive(Debug)]
    struct Country(&'static str);

    struct CountryStringifier;

    impl Stringifier for CountryStringifier {
        fn stringify(&self, value: &Value) -> Option<String> {
            match value {
                Value::Custom(custom) => custom.downcast_ref::<Country>().map(|c| c.0.to_string()),
                _ => None,
            }
        }
    }

    #[test]
    fn custom_stringifier_reaches_every_chain() {
        let formatters = Formatters::builder(Arc::new(NullTranslator::default()))
            .stringifier(CountryStringifier)
            .build();
        let value = Value::custom(Country("Indonesia"));

        assert_eq!(formatters.stringifier().to_text(&value), "Indonesia");
        assert_eq!(formatters.htmlifier().to_html(&value), "Indonesia");
        assert_eq!(formatters.cellifier().to_cell(&value).content, "Indonesia");
        assert!(formatters.numberifier().to_number(&value).is_err());
    }
}
