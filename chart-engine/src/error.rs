//! FILENAME: chart-engine/src/error.rs

use analytics_model::{ModelError, TranslatableMessage, UserFacing};
use formatter::FormatterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// The result cannot be shown with the requested chart type.
    #[error("{0}")]
    UnsupportedData(String),

    #[error("Unknown chart type: {0}")]
    UnknownChartType(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Formatter(#[from] FormatterError),

    #[error("Chart serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChartError {
    pub fn unsupported(message: impl Into<String>) -> Self {
        ChartError::UnsupportedData(message.into())
    }
}

impl UserFacing for ChartError {
    fn user_message(&self) -> Option<TranslatableMessage> {
        match self {
            ChartError::UnsupportedData(message) => Some(TranslatableMessage::new(message.clone())),
            ChartError::UnknownChartType(_) => Some(TranslatableMessage::new("Unsupported chart type")),
            ChartError::Model(e) => e.user_message(),
            ChartError::Formatter(_) | ChartError::Serialization(_) => None,
        }
    }
}
