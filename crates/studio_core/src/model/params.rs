//! Generation parameters panel state.
//!
//! # Invariants
//! - Every value stays inside its slider range after a successful `set`.
//! - Serialized names are camelCase to match host payloads.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 2048;
const DEFAULT_TOP_P: f64 = 1.0;

/// Tunable sampling parameters sent alongside a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationParameters {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// Addressable parameter slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    Temperature,
    MaxTokens,
    TopP,
    FrequencyPenalty,
    PresencePenalty,
}

impl ParameterKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::MaxTokens => "maxTokens",
            Self::TopP => "topP",
            Self::FrequencyPenalty => "frequencyPenalty",
            Self::PresencePenalty => "presencePenalty",
        }
    }

    /// Inclusive `(min, max)` slider bounds.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Temperature => (0.0, 2.0),
            Self::MaxTokens => (1.0, 8192.0),
            Self::TopP => (0.0, 1.0),
            Self::FrequencyPenalty | Self::PresencePenalty => (-2.0, 2.0),
        }
    }
}

/// Rejected parameter update.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    NotFinite(ParameterKey),
    NotInteger { key: ParameterKey, value: f64 },
    OutOfRange {
        key: ParameterKey,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite(key) => write!(f, "{} must be a finite number", key.as_str()),
            Self::NotInteger { key, value } => {
                write!(f, "{} must be a whole number, got {value}", key.as_str())
            }
            Self::OutOfRange {
                key,
                value,
                min,
                max,
            } => write!(
                f,
                "{} must be within [{min}, {max}], got {value}",
                key.as_str()
            ),
        }
    }
}

impl Error for ParameterError {}

impl GenerationParameters {
    /// Updates one parameter after range validation.
    ///
    /// # Errors
    /// - `NotFinite` for NaN/infinite input.
    /// - `NotInteger` when `max_tokens` receives a fractional value.
    /// - `OutOfRange` when the value falls outside the slider bounds.
    pub fn set(&mut self, key: ParameterKey, value: f64) -> Result<(), ParameterError> {
        check_value(key, value)?;
        match key {
            ParameterKey::Temperature => self.temperature = value,
            ParameterKey::MaxTokens => self.max_tokens = value as u32,
            ParameterKey::TopP => self.top_p = value,
            ParameterKey::FrequencyPenalty => self.frequency_penalty = value,
            ParameterKey::PresencePenalty => self.presence_penalty = value,
        }
        Ok(())
    }

    /// Reads one parameter as a plain number.
    pub fn get(&self, key: ParameterKey) -> f64 {
        match key {
            ParameterKey::Temperature => self.temperature,
            ParameterKey::MaxTokens => f64::from(self.max_tokens),
            ParameterKey::TopP => self.top_p,
            ParameterKey::FrequencyPenalty => self.frequency_penalty,
            ParameterKey::PresencePenalty => self.presence_penalty,
        }
    }

    /// Restores the panel defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates every field; used when parameters arrive from config.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for key in ALL_PARAMETER_KEYS {
            check_value(*key, self.get(*key))?;
        }
        Ok(())
    }
}

/// Every parameter key, in panel order.
pub const ALL_PARAMETER_KEYS: &[ParameterKey] = &[
    ParameterKey::Temperature,
    ParameterKey::MaxTokens,
    ParameterKey::TopP,
    ParameterKey::FrequencyPenalty,
    ParameterKey::PresencePenalty,
];

fn check_value(key: ParameterKey, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite(key));
    }
    if key == ParameterKey::MaxTokens && value.fract() != 0.0 {
        return Err(ParameterError::NotInteger { key, value });
    }
    let (min, max) = key.range();
    if value < min || value > max {
        return Err(ParameterError::OutOfRange {
            key,
            value,
            min,
            max,
        });
    }
    Ok(())
}
