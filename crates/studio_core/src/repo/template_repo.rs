//! Template repository contract and in-memory implementation.

use super::{RepoError, RepoResult};
use crate::model::icon::IconId;
use crate::model::template::{PromptTemplate, TemplateId};
use std::collections::HashSet;

/// Storage contract for the template library.
pub trait TemplateRepository {
    fn insert(&mut self, template: PromptTemplate) -> RepoResult<TemplateId>;
    fn get(&self, id: TemplateId) -> Option<&PromptTemplate>;
    fn list(&self) -> &[PromptTemplate];
    fn set_favorite(&mut self, id: TemplateId, favorite: bool) -> RepoResult<()>;
    fn remove(&mut self, id: TemplateId) -> RepoResult<PromptTemplate>;

    /// Icons carried by every stored template.
    fn used_icons(&self) -> HashSet<IconId> {
        self.list().iter().map(|template| template.icon).collect()
    }
}

/// Vec-backed template store preserving creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateRepository {
    templates: Vec<PromptTemplate>,
}

impl InMemoryTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `templates`, keeping their order.
    pub fn with_templates(templates: Vec<PromptTemplate>) -> Self {
        Self { templates }
    }

    fn position(&self, id: TemplateId) -> RepoResult<usize> {
        self.templates
            .iter()
            .position(|template| template.id == id)
            .ok_or(RepoError::NotFound(id))
    }
}

impl TemplateRepository for InMemoryTemplateRepository {
    fn insert(&mut self, template: PromptTemplate) -> RepoResult<TemplateId> {
        if self.get(template.id).is_some() {
            return Err(RepoError::DuplicateId(template.id));
        }
        let id = template.id;
        self.templates.push(template);
        Ok(id)
    }

    fn get(&self, id: TemplateId) -> Option<&PromptTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    fn list(&self) -> &[PromptTemplate] {
        &self.templates
    }

    fn set_favorite(&mut self, id: TemplateId, favorite: bool) -> RepoResult<()> {
        let index = self.position(id)?;
        self.templates[index].favorite = favorite;
        Ok(())
    }

    fn remove(&mut self, id: TemplateId) -> RepoResult<PromptTemplate> {
        let index = self.position(id)?;
        Ok(self.templates.remove(index))
    }
}
