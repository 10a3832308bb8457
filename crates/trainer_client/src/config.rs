//! Client configuration.
//!
//! The page may carry an inline JSON block:
//!
//! ```html
//! <script id="trainer-config" type="application/json">
//!   { "base_path": "/api/v1/trainer", "log_level": "debug" }
//! </script>
//! ```
//!
//! Every key is optional; missing keys fall back to [`ClientConfig::default`].

use serde::{Deserialize, Serialize};
use trainer_common::BASE_PATH;

use crate::error::{ClientError, Result};

/// Element id of the inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "trainer-config";

/// Console verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Path (or absolute URL) of the trainer collection.
    pub base_path: String,
    /// Console verbosity.
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: BASE_PATH.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl ClientConfig {
    /// Parse and validate an inline configuration block.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(ClientError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the optional page block; absent or blank text means defaults.
    pub fn load(text: Option<&str>) -> Result<Self> {
        match text.map(str::trim).filter(|t| !t.is_empty()) {
            None => Ok(Self::default()),
            Some(text) => Self::from_json(text),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let path = self.base_path.as_str();
        if path.is_empty() {
            return Err(ClientError::config_validation("base_path is empty"));
        }
        if !(path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://")) {
            return Err(ClientError::config_validation(format!(
                "base_path '{path}' must start with '/' or an http(s) scheme"
            )));
        }
        if path.len() > 1 && path.ends_with('/') {
            return Err(ClientError::config_validation(format!(
                "base_path '{path}' must not end with '/'"
            )));
        }
        Ok(())
    }
}
