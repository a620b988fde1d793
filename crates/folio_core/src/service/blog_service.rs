//! Blog use-cases.
//!
//! # Responsibility
//! - List posts for the current language with optional tag filtering.
//! - Resolve one post into display paragraphs.
//!
//! # Invariants
//! - Posts keep catalog order.
//! - A post missing the requested language is shown in the default one and
//!   flagged with `fell_back`.

use crate::catalog::localize::Localized;
use crate::catalog::store::{CatalogError, CatalogResult, ContentCatalog};
use crate::catalog::text::{derive_preview, split_paragraphs};
use crate::filter::{filter_items, FilterCriteria};
use crate::model::item::{Item, ItemId, ItemKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Blog use-case errors.
#[derive(Debug)]
pub enum BlogError {
    /// No post with this id exists.
    PostNotFound(String),
    Catalog(CatalogError),
}

impl Display for BlogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PostNotFound(id) => write!(f, "post not found: {id}"),
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BlogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::PostNotFound(_) => None,
        }
    }
}

impl From<CatalogError> for BlogError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// Post list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub id: ItemId,
    /// Locale of the record actually shown.
    pub locale: String,
    pub title: String,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub preview: Option<String>,
}

/// Full post view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub id: ItemId,
    pub locale: String,
    pub fell_back: bool,
    pub title: String,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub paragraphs: Vec<String>,
}

/// Blog facade over a loaded catalog.
pub struct BlogService<'c> {
    catalog: &'c ContentCatalog,
}

impl<'c> BlogService<'c> {
    pub fn new(catalog: &'c ContentCatalog) -> Self {
        Self { catalog }
    }

    /// Lists posts, optionally restricted to one language-neutral tag
    /// (case-insensitive).
    pub fn list_posts(&self, locale: &str, tag: Option<&str>) -> CatalogResult<Vec<PostSummary>> {
        let tag = tag.map(str::trim).filter(|value| !value.is_empty());
        let criteria = FilterCriteria::new(Some(ItemKind::Post), None, tag);
        filter_items(self.catalog.items(), &criteria)
            .into_iter()
            .map(|item| -> CatalogResult<PostSummary> {
                let localized = self.catalog.localized(item, locale)?;
                Ok(summary(item, localized))
            })
            .collect()
    }

    /// Resolves one post for display.
    pub fn post(&self, id: &str, locale: &str) -> Result<PostView, BlogError> {
        let item = self
            .catalog
            .item(id)
            .filter(|item| item.kind == ItemKind::Post)
            .ok_or_else(|| BlogError::PostNotFound(id.to_string()))?;
        let localized = self.catalog.localized(item, locale)?;
        let content = localized.content;

        Ok(PostView {
            id: item.id().clone(),
            locale: localized.locale.to_string(),
            fell_back: localized.fell_back,
            title: content.title.clone(),
            date: content.date.clone(),
            read_time: content.read_time.clone(),
            tags: content.tags.clone(),
            paragraphs: split_paragraphs(&content.body),
        })
    }
}

fn summary(item: &Item, localized: Localized<'_>) -> PostSummary {
    let content = localized.content;
    PostSummary {
        id: item.id().clone(),
        locale: localized.locale.to_string(),
        title: content.title.clone(),
        date: content.date.clone(),
        read_time: content.read_time.clone(),
        tags: content.tags.clone(),
        preview: content
            .preview
            .clone()
            .or_else(|| derive_preview(&content.body)),
    }
}
