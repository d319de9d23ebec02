//! FILENAME: frontend/src/config.rs
//! PURPOSE: Settings the frontend is built from.
//! CONTEXT: Loaded from JSON. Every field has a default, so `{}` is a valid
//! configuration.

use std::collections::HashMap;
use std::path::Path;

use chart_engine::ChartConfiguration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Render(#[from] html_renderer::RenderError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Locale used for translations, number formatting and chart options.
    pub locale: String,
    /// Name of the built-in HTML theme.
    pub theme: String,
    pub chart: ChartConfiguration,
    /// Message translations: locale -> message id -> text.
    pub catalogs: HashMap<String, HashMap<String, String>>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        FrontendConfig {
            locale: "en".to_string(),
            theme: html_renderer::theme::BOOTSTRAP5.to_string(),
            chart: ChartConfiguration::default(),
            catalogs: HashMap::new(),
        }
    }
}

impl FrontendConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        log::debug!("loading frontend configuration from {}", path.display());
        Self::from_json_str(&json)
    }
}
