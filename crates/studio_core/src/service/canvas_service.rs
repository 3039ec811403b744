//! Canvas editor use-case service.
//!
//! # Responsibility
//! - Track the active document and apply content edits to it.
//! - Drive undo/redo through one `EditHistory` owned by the editor.
//! - Derive export file names and footer statistics.
//!
//! # Invariants
//! - Exactly one document is active; the canvas never becomes empty.
//! - Switching to a different document resets the history.
//! - Every edit records the pre-edit content before replacing it.

use crate::history::EditHistory;
use crate::model::document::{CanvasDocument, DocumentId, DocumentKind};
use crate::repo::document_repo::{DocumentRepository, InMemoryDocumentRepository};
use crate::repo::RepoError;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Service error for canvas use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasServiceError {
    /// Target document does not exist.
    DocumentNotFound(DocumentId),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for CanvasServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DocumentNotFound(id) => write!(f, "document not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CanvasServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::DocumentNotFound(_) => None,
        }
    }
}

impl From<RepoError> for CanvasServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::DocumentNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Finalized export payload handed to the download collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentExport {
    pub file_name: String,
    pub content: String,
}

/// Footer statistics for the active document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub characters: usize,
    pub lines: usize,
    pub words: usize,
}

impl DocumentStats {
    pub fn of(content: &str) -> Self {
        Self {
            characters: content.chars().count(),
            lines: content.split('\n').count(),
            words: content.split_whitespace().count(),
        }
    }
}

/// Canvas editor facade over a document repository.
pub struct CanvasService<R: DocumentRepository> {
    repo: R,
    active_id: DocumentId,
    history: EditHistory,
}

impl CanvasService<InMemoryDocumentRepository> {
    /// In-memory canvas opened on the welcome document.
    pub fn with_defaults() -> Result<Self, CanvasServiceError> {
        Self::new(InMemoryDocumentRepository::new(), CanvasDocument::welcome())
    }
}

impl<R: DocumentRepository> CanvasService<R> {
    /// Stores `initial` and makes it the active document.
    pub fn new(mut repo: R, initial: CanvasDocument) -> Result<Self, CanvasServiceError> {
        let active_id = repo.insert(initial)?;
        Ok(Self {
            repo,
            active_id,
            history: EditHistory::new(),
        })
    }

    /// Creates a document of `kind`, activates it and resets the history.
    pub fn create_document(
        &mut self,
        kind: DocumentKind,
    ) -> Result<&CanvasDocument, CanvasServiceError> {
        let id = self.repo.insert(CanvasDocument::new(kind))?;
        self.activate(id);
        info!(
            "event=document_create module=canvas status=ok document_id={} kind={}",
            id,
            kind.as_str()
        );
        self.document(id)
    }

    /// Activates `id`. Re-selecting the active document keeps its history.
    pub fn switch_to(&mut self, id: DocumentId) -> Result<(), CanvasServiceError> {
        if self.repo.get(id).is_none() {
            return Err(CanvasServiceError::DocumentNotFound(id));
        }
        if id != self.active_id {
            self.activate(id);
            debug!(
                "event=document_switch module=canvas status=ok document_id={}",
                id
            );
        }
        Ok(())
    }

    /// Replaces the active document body, recording the previous body.
    pub fn update_content(&mut self, content: impl Into<String>) -> Result<(), CanvasServiceError> {
        let previous = self.active()?.content.clone();
        self.history.record_edit(previous);
        self.repo
            .update_content(self.active_id, content.into().as_str())?;
        Ok(())
    }

    /// Restores the previous snapshot. Returns `false` when nothing to undo.
    pub fn undo(&mut self) -> Result<bool, CanvasServiceError> {
        match self.history.undo() {
            Some(snapshot) => {
                self.repo.update_content(self.active_id, snapshot.as_str())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Re-applies an undone snapshot. Returns `false` when nothing to redo.
    pub fn redo(&mut self) -> Result<bool, CanvasServiceError> {
        match self.history.redo() {
            Some(snapshot) => {
                self.repo.update_content(self.active_id, snapshot.as_str())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn active(&self) -> Result<&CanvasDocument, CanvasServiceError> {
        self.document(self.active_id)
    }

    /// All documents in creation order (document picker).
    pub fn documents(&self) -> &[CanvasDocument] {
        self.repo.list()
    }

    /// Builds the download payload for the active document.
    ///
    /// File name: title with whitespace runs replaced by `-`, lower-cased,
    /// plus the kind extension.
    pub fn export_active(&self) -> Result<DocumentExport, CanvasServiceError> {
        let document = self.active()?;
        let stem = WHITESPACE_RUN_RE
            .replace_all(document.title.as_str(), "-")
            .to_lowercase();
        Ok(DocumentExport {
            file_name: format!("{stem}.{}", document.kind.file_extension()),
            content: document.content.clone(),
        })
    }

    pub fn stats(&self) -> Result<DocumentStats, CanvasServiceError> {
        Ok(DocumentStats::of(self.active()?.content.as_str()))
    }

    fn activate(&mut self, id: DocumentId) {
        self.active_id = id;
        self.history.reset();
    }

    fn document(&self, id: DocumentId) -> Result<&CanvasDocument, CanvasServiceError> {
        self.repo
            .get(id)
            .ok_or(CanvasServiceError::DocumentNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentStats;

    #[test]
    fn stats_count_chars_lines_and_words() {
        let stats = DocumentStats::of("héllo  world\nsecond line\n");
        assert_eq!(stats.characters, 25);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.words, 4);
    }

    #[test]
    fn stats_of_empty_content_has_one_line() {
        assert_eq!(
            DocumentStats::of(""),
            DocumentStats {
                characters: 0,
                lines: 1,
                words: 0,
            }
        );
    }
}
