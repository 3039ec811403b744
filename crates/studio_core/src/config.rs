//! Studio configuration.
//!
//! # Responsibility
//! - Describe host-provided startup settings with per-field defaults.
//! - Validate settings before any panel state is built from them.
//!
//! # Invariants
//! - A missing field falls back to its default; unknown fields are ignored.
//! - A validated config always names a catalog model and in-range parameters.

use crate::logging::{default_log_level, init_logging, normalize_level, LoggingError};
use crate::model::ai_model::{find_model, model_catalog, ModelSelection};
use crate::model::params::{GenerationParameters, ParameterError};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Startup settings supplied by the host as JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudioConfig {
    #[serde(default = "default_level")]
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` disables file logging.
    #[serde(default)]
    pub log_dir: Option<String>,
    #[serde(default = "default_model_id")]
    pub default_model_id: String,
    #[serde(default)]
    pub parameters: GenerationParameters,
}

fn default_level() -> String {
    default_log_level().to_string()
}

fn default_model_id() -> String {
    model_catalog()
        .first()
        .map(|model| model.id.clone())
        .unwrap_or_default()
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            log_level: default_level(),
            log_dir: None,
            default_model_id: default_model_id(),
            parameters: GenerationParameters::default(),
        }
    }
}

/// Config parse/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Logging(LoggingError),
    UnknownModel(String),
    Parameter(ParameterError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid studio config: {err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::UnknownModel(id) => write!(f, "default model is not in catalog: {id}"),
            Self::Parameter(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Parameter(err) => Some(err),
            Self::UnknownModel(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl StudioConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(self.log_level.as_str()).map_err(ConfigError::Logging)?;
        if find_model(self.default_model_id.as_str()).is_none() {
            return Err(ConfigError::UnknownModel(self.default_model_id.clone()));
        }
        self.parameters.validate().map_err(ConfigError::Parameter)?;
        Ok(())
    }

    /// Starts file logging when `log_dir` is set. Returns whether it did.
    pub fn init_logging(&self) -> Result<bool, ConfigError> {
        match self.log_dir.as_deref() {
            Some(dir) => {
                init_logging(self.log_level.as_str(), dir).map_err(ConfigError::Logging)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Model picker state opened on `default_model_id`.
    pub fn model_selection(&self) -> Result<ModelSelection, ConfigError> {
        ModelSelection::with_model(self.default_model_id.as_str())
            .map_err(|_| ConfigError::UnknownModel(self.default_model_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StudioConfig};

    #[test]
    fn empty_object_yields_defaults() {
        let config = StudioConfig::from_json_str("{}").unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.default_model_id, "gpt-4-turbo");
    }

    #[test]
    fn partial_parameters_keep_other_defaults() {
        let config = StudioConfig::from_json_str(
            r#"{"default_model_id":"claude-3-opus","parameters":{"maxTokens":512,"presencePenalty":0.5}}"#,
        )
        .unwrap();
        assert_eq!(config.default_model_id, "claude-3-opus");
        assert_eq!(config.parameters.max_tokens, 512);
        assert_eq!(config.parameters.presence_penalty, 0.5);
        assert_eq!(config.parameters.temperature, 0.7);
    }

    #[test]
    fn rejects_unknown_model_and_out_of_range_parameters() {
        assert!(matches!(
            StudioConfig::from_json_str(r#"{"default_model_id":"nope"}"#),
            Err(ConfigError::UnknownModel(_))
        ));
        assert!(matches!(
            StudioConfig::from_json_str(
                r#"{"parameters":{"temperature":3.0}}"#
            ),
            Err(ConfigError::Parameter(_))
        ));
        assert!(matches!(
            StudioConfig::from_json_str(r#"{"log_level":"loud"}"#),
            Err(ConfigError::Logging(_))
        ));
        assert!(matches!(
            StudioConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
