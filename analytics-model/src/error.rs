//! FILENAME: analytics-model/src/error.rs

use std::error::Error;
use std::fmt;

use thiserror::Error;

use crate::translation::{TranslatableMessage, Translator};

/// Errors whose message is safe to show to end users can expose it as a
/// translatable message.
pub trait UserFacing {
    fn user_message(&self) -> Option<TranslatableMessage>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Result is empty")]
    EmptyResult,

    #[error("Result rows are not ordered hierarchically")]
    HierarchicalOrderingRequired,

    #[error("Measure not found: {0}")]
    MeasureNotFound(String),

    #[error("Dimension not found: {0}")]
    DimensionNotFound(String),
}

impl UserFacing for ModelError {
    fn user_message(&self) -> Option<TranslatableMessage> {
        match self {
            ModelError::EmptyResult => Some(TranslatableMessage::new("The result is empty.")),
            ModelError::HierarchicalOrderingRequired => Some(TranslatableMessage::new(
                "The result must be ordered by its dimensions to be shown as a pivot table.",
            )),
            ModelError::MeasureNotFound(_) | ModelError::DimensionNotFound(_) => None,
        }
    }
}

// ============================================================================
// FRONTEND ERROR
// ============================================================================

/// The only error the frontend hands to its callers. The message is always
/// user-friendly; technical details stay in `source()`.
#[derive(Debug)]
pub struct FrontendError {
    message: TranslatableMessage,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl FrontendError {
    pub const GENERIC_MESSAGE: &'static str =
        "An error occurred. Please try again later and contact technical support if the problem persists.";

    /// Keeps the error's own message when it is user-facing, otherwise
    /// substitutes the generic message.
    pub fn wrap<E>(error: E) -> Self
    where
        E: Error + UserFacing + Send + Sync + 'static,
    {
        let message = match error.user_message() {
            Some(message) => message,
            None => {
                log::warn!("wrapping internal frontend error: {}", error);
                TranslatableMessage::new(Self::GENERIC_MESSAGE)
            }
        };

        FrontendError {
            message,
            source: Some(Box::new(error)),
        }
    }

    pub fn new(message: TranslatableMessage) -> Self {
        FrontendError {
            message,
            source: None,
        }
    }

    pub fn message(&self) -> &TranslatableMessage {
        &self.message
    }

    pub fn is_generic(&self) -> bool {
        self.message.id() == Self::GENERIC_MESSAGE
    }

    pub fn trans(&self, translator: &dyn Translator) -> String {
        translator.trans(&self.message)
    }
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for FrontendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::CatalogTranslator;

    #[test]
    fn user_facing_errors_keep_their_message() {
        let error = FrontendError::wrap(ModelError::EmptyResult);

        assert!(!error.is_generic());
        assert_eq!(error.to_string(), "The result is empty.");
        assert!(error.source().is_some());
    }

    #[test]
    fn internal_errors_get_generic_message() {
        let error = FrontendError::wrap(ModelError::MeasureNotFound("revenue".to_string()));

        assert!(error.is_generic());
        assert!(!error.to_string().contains("revenue"));
        assert_eq!(
            error.source().map(|s| s.to_string()),
            Some("Measure not found: revenue".to_string())
        );
    }

    #[test]
    fn frontend_error_translates() {
        let mut translator = CatalogTranslator::new("id");
        translator.add("id", "The result is empty.", "Hasil kosong.");

        let error = FrontendError::wrap(ModelError::EmptyResult);
        assert_eq!(error.trans(&translator), "Hasil kosong.");
    }
}
