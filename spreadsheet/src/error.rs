//! FILENAME: spreadsheet/src/error.rs

use analytics_model::{ModelError, TranslatableMessage, UserFacing};
use pivot_engine::PivotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Pivot(#[from] PivotError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl UserFacing for SpreadsheetError {
    fn user_message(&self) -> Option<TranslatableMessage> {
        match self {
            SpreadsheetError::Pivot(e) => e.user_message(),
            SpreadsheetError::Model(e) => e.user_message(),
            SpreadsheetError::Io(_) | SpreadsheetError::XlsxWrite(_) => None,
        }
    }
}
