//! Prompt template domain model.
//!
//! # Responsibility
//! - Define the labeled record shown in the template library.
//! - Provide the built-in seed templates.
//!
//! # Invariants
//! - `id` is stable and never reused for another template.
//! - `icon` and `color` are fixed at creation; no API recomputes them.
//! - `title`, `category` and `content` are non-blank.

use crate::model::color::ColorId;
use crate::model::icon::IconId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a prompt template.
pub type TemplateId = Uuid;

/// Reusable prompt template with derived presentation labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: TemplateId,
    pub title: String,
    /// Free-text category; predefined names get theme colors.
    pub category: String,
    pub description: String,
    /// Prompt body, may contain `[placeholder]` markers.
    pub content: String,
    pub icon: IconId,
    pub color: ColorId,
    pub favorite: bool,
}

/// Category choice made in the creation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    /// One of the predefined category names, used verbatim.
    Predefined(String),
    /// User-typed category; trimmed before use.
    Custom(String),
}

impl CategoryChoice {
    /// Returns the effective category name, `None` when blank.
    pub fn resolve(&self) -> Option<String> {
        let value = match self {
            Self::Predefined(name) => name.as_str(),
            Self::Custom(name) => name.trim(),
        };
        if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Creation request for one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTemplate {
    pub title: String,
    pub category: CategoryChoice,
    pub description: String,
    pub content: String,
}

struct SeedTemplate {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    content: &'static str,
    icon: IconId,
    color: ColorId,
    favorite: bool,
}

const SEED_TEMPLATES: &[SeedTemplate] = &[
    SeedTemplate {
        title: "Code Review",
        category: "Development",
        description: "Comprehensive code review template",
        content: "Please review the following code for:\n- Best practices\n- Performance optimization\n- Security concerns\n- Readability improvements\n\nCode:\n```\n[Your code here]\n```",
        icon: IconId::Code,
        color: ColorId::Primary,
        favorite: false,
    },
    SeedTemplate {
        title: "Creative Writing",
        category: "Writing",
        description: "Structured creative writing prompt",
        content: "Write a creative story with the following parameters:\n- Genre: [Specify genre]\n- Setting: [Describe setting]\n- Main character: [Character description]\n- Conflict: [Central conflict]\n- Tone: [Desired tone]\n\nLength: Approximately [word count] words.",
        icon: IconId::PenTool,
        color: ColorId::Accent,
        favorite: true,
    },
    SeedTemplate {
        title: "Learning Assistant",
        category: "Education",
        description: "Educational content creation",
        content: "Explain [topic] to me as if I'm a [beginner/intermediate/advanced] learner. Include:\n- Key concepts\n- Real-world examples\n- Common misconceptions\n- Practice questions\n\nMake it engaging and easy to understand.",
        icon: IconId::BookOpen,
        color: ColorId::Success,
        favorite: false,
    },
    SeedTemplate {
        title: "Brainstorming Session",
        category: "Strategy",
        description: "Structured brainstorming template",
        content: "Help me brainstorm ideas for: [Your topic/challenge]\n\nContext: [Provide relevant background]\nGoals: [What you want to achieve]\nConstraints: [Any limitations]\n\nGenerate 10 creative and practical solutions.",
        icon: IconId::MessageSquare,
        color: ColorId::Warning,
        favorite: false,
    },
];

/// Builds the built-in templates with fresh ids.
pub fn seed_templates() -> Vec<PromptTemplate> {
    SEED_TEMPLATES
        .iter()
        .map(|seed| PromptTemplate {
            id: Uuid::new_v4(),
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            description: seed.description.to_string(),
            content: seed.content.to_string(),
            icon: seed.icon,
            color: seed.color,
            favorite: seed.favorite,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{seed_templates, CategoryChoice};
    use crate::label::assign_color;

    #[test]
    fn seed_colors_match_category_derivation() {
        for template in seed_templates() {
            assert_eq!(template.color, assign_color(template.category.as_str()));
        }
    }

    #[test]
    fn custom_category_is_trimmed_and_blank_rejected() {
        assert_eq!(
            CategoryChoice::Custom("  Finance ".to_string()).resolve(),
            Some("Finance".to_string())
        );
        assert_eq!(CategoryChoice::Custom("   ".to_string()).resolve(), None);
        assert_eq!(CategoryChoice::Predefined(String::new()).resolve(), None);
    }
}
