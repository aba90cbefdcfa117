//! Filter configuration.
//!
//! Configuration is read from a JSON document whose keys are all optional;
//! missing keys take the defaults below, which select position fixes and
//! recommended-minimum sentences, pass each type at most twice a second and
//! present everything as GPS.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::WILDCARD;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or has fields of the wrong type.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Settings for a [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// Type codes to pass through; `*` passes every type.
    pub types: Vec<String>,

    /// Minimum time between two emitted sentences of the same type, in
    /// milliseconds. Zero disables rate limiting.
    pub min_period_ms: u64,

    /// Talker id written into every emitted sentence; `null` keeps the
    /// original talker.
    pub talker: Option<String>,

    /// Text written in front of every emitted sentence.
    pub prefix: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            types: vec!["GGA".to_string(), "RMC".to_string()],
            min_period_ms: 500,
            talker: Some(nmea_core::talker::GPS.to_string()),
            prefix: "geo nmea ".to_string(),
        }
    }
}

impl FilterConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn min_period(&self) -> Duration {
        Duration::from_millis(self.min_period_ms)
    }

    /// Check for settings that are accepted but probably not intended.
    ///
    /// Returns one warning message per suspicious setting.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.types.is_empty() {
            warnings.push("no sentence types selected, nothing will be emitted".to_string());
        }

        for code in &self.types {
            let is_code = code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase());
            if code != WILDCARD && !is_code {
                warnings.push(format!(
                    "type {:?} is not a 3-letter upper-case code and will never match",
                    code
                ));
            }
        }

        if let Some(talker) = &self.talker {
            let normalized = nmea_core::talker::normalize(talker);
            if !normalized.bytes().all(|b| b.is_ascii_uppercase()) {
                warnings.push(format!(
                    "talker {:?} is not two letters, rewritten sentences will not decode",
                    talker
                ));
            } else if &normalized != talker {
                warnings.push(format!(
                    "talker {:?} will be written as {:?}",
                    talker, normalized
                ));
            }
        }

        warnings
    }
}
