//! Studio domain model.
//!
//! # Responsibility
//! - Define the records shared by the template library, canvas, chat and
//!   settings panels.
//! - Keep presentation ids (`IconId`, `ColorId`) opaque and serializable.
//!
//! # Invariants
//! - Templates and documents are identified by stable UUIDs.
//! - Derived labels are stored on the record, not recomputed on read.

pub mod ai_model;
pub mod chat;
pub mod color;
pub mod document;
pub mod icon;
pub mod params;
pub mod template;
