//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented storage contracts for templates and documents.
//! - Keep collection bookkeeping out of service orchestration.
//!
//! # Invariants
//! - Repositories preserve insertion order; list APIs return it unchanged.
//! - Unknown ids surface as `RepoError::NotFound`, never as silent no-ops.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod document_repo;
pub mod template_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by template and document stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(Uuid),
    DuplicateId(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
        }
    }
}

impl Error for RepoError {}
