//! Prompt template library use-case service.
//!
//! # Responsibility
//! - Validate template creation input and derive icon/color labels.
//! - Provide delete, favorite toggle and search over the library.
//!
//! # Invariants
//! - Labels are derived once at creation against the icons in use right then.
//! - Search results keep library order inside each section.
//! - Log lines carry ids and label ids only, never titles or bodies.

use crate::label::{assign_color, assign_icon};
use crate::model::color::ColorId;
use crate::model::icon::{IconId, IconPool};
use crate::model::template::{seed_templates, NewTemplate, PromptTemplate, TemplateId};
use crate::repo::template_repo::{InMemoryTemplateRepository, TemplateRepository};
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Service error for template use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateServiceError {
    /// Title is blank after trim.
    MissingTitle,
    /// Content is blank after trim.
    MissingContent,
    /// Category resolves to nothing (custom text was blank).
    MissingCategory,
    /// Target template does not exist.
    TemplateNotFound(TemplateId),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for TemplateServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "template title must not be blank"),
            Self::MissingContent => write!(f, "template content must not be blank"),
            Self::MissingCategory => write!(f, "template category must not be blank"),
            Self::TemplateNotFound(id) => write!(f, "template not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TemplateServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TemplateServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TemplateNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Search result split the way the library panel renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSections<'a> {
    pub favorites: Vec<&'a PromptTemplate>,
    pub others: Vec<&'a PromptTemplate>,
}

impl TemplateSections<'_> {
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.others.is_empty()
    }

    pub fn len(&self) -> usize {
        self.favorites.len() + self.others.len()
    }
}

/// Template library facade over repository implementations.
pub struct TemplateService<R: TemplateRepository> {
    repo: R,
    pool: IconPool,
}

impl TemplateService<InMemoryTemplateRepository> {
    /// In-memory library seeded with the built-in templates.
    pub fn with_defaults() -> Self {
        Self::new(InMemoryTemplateRepository::with_templates(seed_templates()))
    }
}

impl<R: TemplateRepository> TemplateService<R> {
    /// Creates a service drawing icons from the default pool.
    pub fn new(repo: R) -> Self {
        Self::with_pool(repo, IconPool::default_pool().clone())
    }

    /// Creates a service drawing icons from `pool`.
    pub fn with_pool(repo: R, pool: IconPool) -> Self {
        Self { repo, pool }
    }

    /// Validates `request`, derives labels and appends the new template.
    pub fn create_template(
        &mut self,
        request: NewTemplate,
    ) -> Result<PromptTemplate, TemplateServiceError> {
        let validated = validate_new_template(&request);
        let category = match validated {
            Ok(category) => category,
            Err(err) => {
                warn!(
                    "event=template_create module=templates status=rejected reason={}",
                    err
                );
                return Err(err);
            }
        };

        let icon = self.preview_icon(request.title.as_str());
        let color = assign_color(category.as_str());
        let template = PromptTemplate {
            id: Uuid::new_v4(),
            title: request.title,
            category,
            description: request.description,
            content: request.content,
            icon,
            color,
            favorite: false,
        };

        let id = self.repo.insert(template.clone())?;
        info!(
            "event=template_create module=templates status=ok template_id={} icon={} color={}",
            id, icon, color
        );
        Ok(template)
    }

    /// Icon a template titled `title` would receive right now.
    pub fn preview_icon(&self, title: &str) -> IconId {
        assign_icon(title, &self.repo.used_icons(), &self.pool)
    }

    /// Color a template in `category` would receive.
    pub fn preview_color(&self, category: &str) -> ColorId {
        assign_color(category)
    }

    pub fn get_template(&self, id: TemplateId) -> Option<&PromptTemplate> {
        self.repo.get(id)
    }

    /// All templates in library order.
    pub fn list_templates(&self) -> &[PromptTemplate] {
        self.repo.list()
    }

    /// Removes one template; its icon becomes available again.
    pub fn delete_template(
        &mut self,
        id: TemplateId,
    ) -> Result<PromptTemplate, TemplateServiceError> {
        let removed = self.repo.remove(id)?;
        info!(
            "event=template_delete module=templates status=ok template_id={}",
            id
        );
        Ok(removed)
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, id: TemplateId) -> Result<bool, TemplateServiceError> {
        let current = self
            .repo
            .get(id)
            .map(|template| template.favorite)
            .ok_or(TemplateServiceError::TemplateNotFound(id))?;
        self.repo.set_favorite(id, !current)?;
        Ok(!current)
    }

    /// Case-insensitive substring search over title, category and
    /// description. A blank query matches everything.
    pub fn search(&self, query: &str) -> TemplateSections<'_> {
        let needle = query.to_lowercase();
        let (favorites, others): (Vec<&PromptTemplate>, Vec<&PromptTemplate>) = self
            .repo
            .list()
            .iter()
            .filter(|template| matches_query(template, needle.as_str()))
            .partition(|template| template.favorite);
        TemplateSections { favorites, others }
    }
}

fn matches_query(template: &PromptTemplate, needle: &str) -> bool {
    [
        template.title.as_str(),
        template.category.as_str(),
        template.description.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn validate_new_template(request: &NewTemplate) -> Result<String, TemplateServiceError> {
    if request.title.trim().is_empty() {
        return Err(TemplateServiceError::MissingTitle);
    }
    if request.content.trim().is_empty() {
        return Err(TemplateServiceError::MissingContent);
    }
    request
        .category
        .resolve()
        .ok_or(TemplateServiceError::MissingCategory)
}

#[cfg(test)]
mod tests {
    use super::{matches_query, validate_new_template, TemplateServiceError};
    use crate::model::template::{seed_templates, CategoryChoice, NewTemplate};

    fn request(title: &str, category: CategoryChoice, content: &str) -> NewTemplate {
        NewTemplate {
            title: title.to_string(),
            category,
            description: String::new(),
            content: content.to_string(),
        }
    }

    #[test]
    fn validation_checks_title_then_content_then_category() {
        let blank_title = request(" ", CategoryChoice::Custom(String::new()), "");
        assert_eq!(
            validate_new_template(&blank_title),
            Err(TemplateServiceError::MissingTitle)
        );

        let blank_content = request("t", CategoryChoice::Custom(String::new()), "\n");
        assert_eq!(
            validate_new_template(&blank_content),
            Err(TemplateServiceError::MissingContent)
        );

        let blank_category = request("t", CategoryChoice::Custom("  ".to_string()), "c");
        assert_eq!(
            validate_new_template(&blank_category),
            Err(TemplateServiceError::MissingCategory)
        );
    }

    #[test]
    fn query_matching_ignores_case_and_skips_content() {
        let template = seed_templates().remove(0);
        assert!(matches_query(&template, "code"));
        assert!(matches_query(&template, "development"));
        assert!(matches_query(&template, "comprehensive"));
        assert!(!matches_query(&template, "readability"));
    }
}
