//! FILENAME: html-renderer/src/error.rs

use analytics_model::{ModelError, TranslatableMessage, UserFacing};
use pivot_engine::PivotError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Pivot(#[from] PivotError),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown output type: {0}")]
    UnknownOutputType(String),
}

impl UserFacing for RenderError {
    fn user_message(&self) -> Option<TranslatableMessage> {
        match self {
            RenderError::Model(e) => e.user_message(),
            RenderError::Pivot(e) => e.user_message(),
            RenderError::UnknownTheme(_) | RenderError::UnknownOutputType(_) => None,
        }
    }
}
