//! Canvas document domain model.
//!
//! # Invariants
//! - `id` is stable for the document lifetime.
//! - `last_modified` is refreshed on every content change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a canvas document.
pub type DocumentId = Uuid;

/// Editor mode of a canvas document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Text,
    Code,
    Markdown,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Code => "code",
            Self::Markdown => "markdown",
        }
    }

    /// File extension used when exporting.
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Code => "js",
            Self::Markdown => "md",
        }
    }

    /// Initial body for a freshly created document of this kind.
    pub fn starter_content(self) -> &'static str {
        match self {
            Self::Text => "New text document\n\nStart writing here...",
            Self::Code => "// New code document\nfunction example() {\n  console.log(\"Hello, World!\");\n}\n\nexample();",
            Self::Markdown => "# New Markdown Document\n\n## Overview\n\nStart writing your markdown here...\n\n- List item 1\n- List item 2\n\n```javascript\n// Code example\nconsole.log(\"Hello, World!\");\n```",
        }
    }
}

/// Freeform document edited in the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasDocument {
    pub id: DocumentId,
    pub kind: DocumentKind,
    pub title: String,
    pub content: String,
    pub last_modified: DateTime<Utc>,
}

impl CanvasDocument {
    /// Creates a new document of `kind` with starter content.
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: format!("New {} document", kind.as_str()),
            content: kind.starter_content().to_string(),
            last_modified: Utc::now(),
        }
    }

    /// The document shown on first launch.
    pub fn welcome() -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: DocumentKind::Text,
            title: "Welcome Document".to_string(),
            content: WELCOME_CONTENT.to_string(),
            last_modified: Utc::now(),
        }
    }

    /// Replaces the body and bumps `last_modified`.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.last_modified = Utc::now();
    }
}

const WELCOME_CONTENT: &str = "Welcome to AI Studio Canvas!\n\nThis is your collaborative editing space where you can:\n\u{2022} Edit and refine AI-generated content\n\u{2022} Work with text, code, and markdown\n\u{2022} Save and export your work\n\u{2022} Maintain version history\n\nStart by creating a new document or selecting an existing one from the dropdown above.";
