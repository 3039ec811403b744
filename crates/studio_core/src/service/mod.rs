//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repositories, label derivation and edit history into
//!   panel-level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod canvas_service;
pub mod chat_service;
pub mod template_service;
