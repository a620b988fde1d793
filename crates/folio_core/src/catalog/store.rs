//! Loaded catalog and its read-only accessors.

use crate::catalog::localize::{localize_with_source, Localized};
use crate::filter::{filter_items, FilterCriteria};
use crate::model::category::Category;
use crate::model::item::{Item, ItemId, ItemKind, ItemValidationError};
use crate::model::locale::{LocaleSettings, LocaleSettingsError};
use crate::model::resume::ResumeDocument;
use crate::selection::state::SelectionState;
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading and lookup errors.
#[derive(Debug)]
pub enum CatalogError {
    /// Content file cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Content file is not valid catalog JSON.
    Json(serde_json::Error),
    Locales(LocaleSettingsError),
    InvalidCategory(String),
    InvalidResume(String),
    /// Item-level defect under `LoadPolicy::Strict`.
    InvalidItem {
        id: String,
        source: ItemValidationError,
    },
    DuplicateItemId(String),
    /// Neither the requested nor the default locale has content.
    MissingDefaultContent { item: ItemId, locale: String },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid catalog json: {err}"),
            Self::Locales(err) => write!(f, "invalid locale settings: {err}"),
            Self::InvalidCategory(message) => write!(f, "invalid category: {message}"),
            Self::InvalidResume(message) => write!(f, "invalid resume: {message}"),
            Self::InvalidItem { id, source } => write!(f, "invalid item `{id}`: {source}"),
            Self::DuplicateItemId(id) => write!(f, "duplicate item id: `{id}`"),
            Self::MissingDefaultContent { item, locale } => {
                write!(f, "item `{item}` has no content for default locale `{locale}`")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Locales(err) => Some(err),
            Self::InvalidItem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<LocaleSettingsError> for CatalogError {
    fn from(value: LocaleSettingsError) -> Self {
        Self::Locales(value)
    }
}

/// Validated, read-only content catalog.
///
/// Constructed only through the loader, so every instance has passed
/// load-time validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    pub(crate) locales: LocaleSettings,
    pub(crate) categories: Vec<Category>,
    pub(crate) items: Vec<Item>,
    pub(crate) resumes: Vec<ResumeDocument>,
}

impl ContentCatalog {
    /// Items in authored order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id().as_str() == id)
    }

    pub fn items_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn locales(&self) -> &LocaleSettings {
        &self.locales
    }

    pub fn default_locale(&self) -> &str {
        self.locales.default.as_str()
    }

    pub fn resumes(&self) -> &[ResumeDocument] {
        &self.resumes
    }

    /// Distinct skills across all items.
    ///
    /// Keeps the first authored casing and sorts case-insensitively.
    pub fn skills(&self) -> Vec<&str> {
        let mut distinct: BTreeMap<String, &str> = BTreeMap::new();
        for item in &self.items {
            for skill in &item.skills {
                distinct
                    .entry(skill.to_lowercase())
                    .or_insert(skill.as_str());
            }
        }
        distinct.into_values().collect()
    }

    /// Returns the authored casing of `label`, matched case-insensitively.
    pub fn canonical_skill(&self, label: &str) -> Option<&str> {
        let wanted = label.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.items
            .iter()
            .flat_map(|item| item.skills.iter())
            .find(|skill| skill.to_lowercase() == wanted)
            .map(String::as_str)
    }

    /// Localized content of `item` for the locale resolved from `requested`.
    pub fn localized<'a>(
        &'a self,
        item: &'a Item,
        requested: &str,
    ) -> CatalogResult<Localized<'a>> {
        let effective = self.locales.resolve(requested);
        localize_with_source(item, effective, self.default_locale())
    }

    /// Applies the selection's filters to the whole catalog.
    ///
    /// An unknown category id matches no item.
    pub fn filter(&self, state: &SelectionState) -> Vec<&Item> {
        let category = match state.category() {
            Some(id) => match self.category(id) {
                Some(category) => Some(category),
                None => {
                    debug!(
                        "event=catalog_filter module=catalog status=unknown_category category={id}"
                    );
                    return Vec::new();
                }
            },
            None => None,
        };

        let criteria = FilterCriteria {
            kind: state.kind().as_kind(),
            category,
            skill: state.skill(),
        };
        filter_items(&self.items, &criteria)
    }
}
