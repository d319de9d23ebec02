//! FILENAME: formatter/src/htmlifier.rs
//! PURPOSE: Converts values to HTML fragments.

use std::sync::Arc;

use analytics_model::Value;

use crate::stringifier::ChainStringifier;

pub trait Htmlifier: Send + Sync {
    /// Returns markup that is inserted verbatim.
    fn htmlify(&self, value: &Value) -> Option<String>;
}

pub struct ChainHtmlifier {
    htmlifiers: Vec<Box<dyn Htmlifier>>,
    stringifier: Arc<ChainStringifier>,
}

impl ChainHtmlifier {
    pub fn new(htmlifiers: Vec<Box<dyn Htmlifier>>, stringifier: Arc<ChainStringifier>) -> Self {
        ChainHtmlifier {
            htmlifiers,
            stringifier,
        }
    }

    /// The first htmlifier's result, or the escaped stringified value.
    pub fn to_html(&self, value: &Value) -> String {
        self.htmlifiers
            .iter()
            .find_map(|h| h.htmlify(value))
            .unwrap_or_else(|| html_escape::encode_quoted_attribute(&self.stringifier.to_text(value)).into_owned())
    }
}

impl Htmlifier for ChainHtmlifier {
    fn htmlify(&self, value: &Value) -> Option<String> {
        Some(self.to_html(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_model::NullTranslator;

    fn stringifier() -> Arc<ChainStringifier> {
        Arc::new(ChainStringifier::new(ChainStringifier::defaults(Arc::new(
            NullTranslator::default(),
        ))))
    }

    #[test]
    fn escapes_stringified_values() {
        let chain = ChainHtmlifier::new(Vec::new(), stringifier());
        assert_eq!(
            chain.to_html(&Value::text("<b>Fish & \"Chips\"</b>")),
            "&lt;b&gt;Fish &amp; &quot;Chips&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn custom_htmlifier_takes_precedence() {
        struct Link;
        impl Htmlifier for Link {
            fn htmlify(&self, value: &Value) -> Option<String> {
                match value {
                    Value::Text(s) if s.starts_with("http") => Some(format!("<a href=\"{}\">{}</a>", s, s)),
                    _ => None,
                }
            }
        }

        let chain = ChainHtmlifier::new(vec![Box::new(Link)], stringifier());
        assert_eq!(
            chain.to_html(&Value::text("https://example.com")),
            "<a href=\"https://example.com\">https://example.com</a>"
        );
        assert_eq!(chain.to_html(&Value::Int(1000)), "1,000");
    }
}
