//! FILENAME: formatter/src/error.rs

use analytics_model::{TranslatableMessage, UserFacing};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatterError {
    #[error("Cannot convert value of type '{0}' to a number")]
    Unconvertible(String),
}

impl UserFacing for FormatterError {
    fn user_message(&self) -> Option<TranslatableMessage> {
        None
    }
}
