//! Core domain logic for the AI Studio panels.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod history;
pub mod label;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, StudioConfig};
pub use history::EditHistory;
pub use label::{assign_color, assign_icon, label_hash};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::ai_model::{model_catalog, AiModel, ModelSelection, ModelSelectionError, ModelTier};
pub use model::chat::{ChatMessage, ChatRole};
pub use model::color::{ColorId, CATEGORY_PALETTE, PREDEFINED_CATEGORIES};
pub use model::document::{CanvasDocument, DocumentId, DocumentKind};
pub use model::icon::{IconError, IconId, IconPool};
pub use model::params::{GenerationParameters, ParameterError, ParameterKey};
pub use model::template::{CategoryChoice, NewTemplate, PromptTemplate, TemplateId};
pub use repo::document_repo::{DocumentRepository, InMemoryDocumentRepository};
pub use repo::template_repo::{InMemoryTemplateRepository, TemplateRepository};
pub use repo::{RepoError, RepoResult};
pub use service::canvas_service::{
    CanvasService, CanvasServiceError, DocumentExport, DocumentStats,
};
pub use service::chat_service::{export_file_name, ChatService, ChatServiceError};
pub use service::template_service::{TemplateSections, TemplateService, TemplateServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
