//! Model catalog offered by the model picker.
//!
//! # Invariants
//! - Catalog ids are unique and stable.
//! - The first catalog entry is the default selection.

use log::info;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Pricing tier badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    Free,
    Pro,
    Premium,
}

/// One selectable model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiModel {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub tier: ModelTier,
}

fn entry(
    id: &str,
    name: &str,
    provider: &str,
    description: &str,
    capabilities: &[&str],
    tier: ModelTier,
) -> AiModel {
    AiModel {
        id: id.to_string(),
        name: name.to_string(),
        provider: provider.to_string(),
        description: description.to_string(),
        capabilities: capabilities.iter().map(|cap| cap.to_string()).collect(),
        tier,
    }
}

static CATALOG: Lazy<Vec<AiModel>> = Lazy::new(|| {
    vec![
        entry(
            "gpt-4-turbo",
            "GPT-4 Turbo",
            "OpenAI",
            "Most capable model for complex tasks",
            &["reasoning", "coding", "analysis"],
            ModelTier::Premium,
        ),
        entry(
            "gpt-3.5-turbo",
            "GPT-3.5 Turbo",
            "OpenAI",
            "Fast and efficient for most tasks",
            &["chat", "coding", "writing"],
            ModelTier::Pro,
        ),
        entry(
            "claude-3-opus",
            "Claude 3 Opus",
            "Anthropic",
            "Advanced reasoning and analysis",
            &["reasoning", "analysis", "writing"],
            ModelTier::Premium,
        ),
        entry(
            "claude-3-sonnet",
            "Claude 3 Sonnet",
            "Anthropic",
            "Balanced performance and speed",
            &["chat", "analysis", "coding"],
            ModelTier::Pro,
        ),
    ]
});

/// Returns the full catalog in picker order.
pub fn model_catalog() -> &'static [AiModel] {
    CATALOG.as_slice()
}

/// Looks up one catalog entry by id.
pub fn find_model(id: &str) -> Option<&'static AiModel> {
    CATALOG.iter().find(|model| model.id == id)
}

/// Model selection errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSelectionError {
    UnknownModel(String),
}

impl Display for ModelSelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownModel(id) => write!(f, "model is not in catalog: {id}"),
        }
    }
}

impl Error for ModelSelectionError {}

/// Currently picked model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSelection {
    selected: &'static AiModel,
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self {
            selected: &CATALOG[0],
        }
    }
}

impl ModelSelection {
    /// Starts from a specific catalog id.
    pub fn with_model(id: &str) -> Result<Self, ModelSelectionError> {
        let mut selection = Self::default();
        selection.select(id)?;
        Ok(selection)
    }

    /// Switches to `id`; the previous selection stays on error.
    pub fn select(&mut self, id: &str) -> Result<&'static AiModel, ModelSelectionError> {
        let model =
            find_model(id.trim()).ok_or_else(|| ModelSelectionError::UnknownModel(id.to_string()))?;
        info!(
            "event=model_select module=models status=ok model_id={}",
            model.id
        );
        self.selected = model;
        Ok(model)
    }

    pub fn selected(&self) -> &'static AiModel {
        self.selected
    }
}
