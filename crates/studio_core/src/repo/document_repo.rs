//! Canvas document repository contract and in-memory implementation.

use super::{RepoError, RepoResult};
use crate::model::document::{CanvasDocument, DocumentId};

/// Storage contract for canvas documents.
pub trait DocumentRepository {
    fn insert(&mut self, document: CanvasDocument) -> RepoResult<DocumentId>;
    fn get(&self, id: DocumentId) -> Option<&CanvasDocument>;
    fn list(&self) -> &[CanvasDocument];
    /// Replaces the body of one document and refreshes its timestamp.
    fn update_content(&mut self, id: DocumentId, content: &str) -> RepoResult<()>;
}

/// Vec-backed document store preserving creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentRepository {
    documents: Vec<CanvasDocument>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentRepository for InMemoryDocumentRepository {
    fn insert(&mut self, document: CanvasDocument) -> RepoResult<DocumentId> {
        if self.get(document.id).is_some() {
            return Err(RepoError::DuplicateId(document.id));
        }
        let id = document.id;
        self.documents.push(document);
        Ok(id)
    }

    fn get(&self, id: DocumentId) -> Option<&CanvasDocument> {
        self.documents.iter().find(|document| document.id == id)
    }

    fn list(&self) -> &[CanvasDocument] {
        &self.documents
    }

    fn update_content(&mut self, id: DocumentId, content: &str) -> RepoResult<()> {
        let document = self
            .documents
            .iter_mut()
            .find(|document| document.id == id)
            .ok_or(RepoError::NotFound(id))?;
        document.set_content(content);
        Ok(())
    }
}
