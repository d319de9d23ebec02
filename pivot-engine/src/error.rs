//! FILENAME: pivot-engine/src/error.rs

use analytics_model::{ModelError, TranslatableMessage, UserFacing};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PivotError {
    #[error("Result is empty")]
    EmptyResult,

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl UserFacing for PivotError {
    fn user_message(&self) -> Option<TranslatableMessage> {
        match self {
            PivotError::EmptyResult => Some(TranslatableMessage::new("The result is empty.")),
            PivotError::Model(e) => e.user_message(),
        }
    }
}
