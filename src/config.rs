//! Engine configuration.

use crate::games::tictactoe::{Marks, Weights};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunable engine settings.
///
/// Every field has a default, so an empty TOML document is a valid config.
///
/// ```toml
/// [weights]
/// first = 1
/// second = 4
///
/// [marks]
/// first = "X"
/// second = "O"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Per-player line weights.
    weights: Weights,

    /// Per-player mark symbols.
    marks: Marks,
}

impl EngineConfig {
    /// Creates a validated configuration.
    #[track_caller]
    #[instrument]
    pub fn new(weights: Weights, marks: Marks) -> Result<Self, ConfigError> {
        let config = Self { weights, marks };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// Errors carry the location of the caller.
    #[track_caller]
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => return Err(ConfigError::new(format!("Failed to parse config: {}", e))),
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[track_caller]
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => content,
            Err(e) => {
                return Err(ConfigError::new(format!(
                    "Failed to read config file: {}",
                    e
                )));
            }
        };

        let config = Self::from_toml_str(&content)?;
        info!(weights = ?config.weights, marks = ?config.marks, "Config loaded successfully");
        Ok(config)
    }

    /// Validates weights and marks.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.marks.validate()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = EngineConfig::from_toml_str("[marks]\nfirst = \"A\"\n").unwrap();
        assert_eq!(config.marks().mark(crate::Player::First), 'A');
        assert_eq!(config.marks().mark(crate::Player::Second), 'O');
        assert_eq!(*config.weights(), Weights::default());
    }

    #[test]
    fn test_invalid_weights_rejected_on_parse() {
        let err = EngineConfig::from_toml_str("[weights]\nfirst = 2\nsecond = 2\n").unwrap_err();
        assert!(err.message.contains("differ"));
    }

    #[test]
    fn test_errors_point_at_caller() {
        let line = line!() + 1;
        let err = EngineConfig::from_toml_str("[marks]\nsecond = \"X\"\n").unwrap_err();
        assert_eq!(err.file, file!());
        assert_eq!(err.line, line);

        let line = line!() + 1;
        let err = EngineConfig::from_toml_str("[weights").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert_eq!(err.line, line);
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = EngineConfig::from_toml_str("[weights\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
