//! Catalog loading from the static content file.
//!
//! # Responsibility
//! - Decode the JSON content file into raw records.
//! - Run catalog-level and item-level validation exactly once.
//! - Apply the configured `LoadPolicy` to item-level defects.
//!
//! # Invariants
//! - Catalog-level defects always fail the load.
//! - Under `LoadPolicy::Lenient` a defective item is dropped, logged and
//!   reported; the remaining items keep their authored order.
//! - The first item with a given id wins; later duplicates are defects.

use crate::catalog::store::{CatalogError, CatalogResult, ContentCatalog};
use crate::model::category::Category;
use crate::model::item::{
    Item, ItemId, ItemKind, ItemLinks, ItemValidationError, LocalizedContent,
};
use crate::model::locale::LocaleSettings;
use crate::model::resume::ResumeDocument;
use log::{info, warn};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

const BUNDLED_CATALOG_JSON: &str = include_str!("../../content/portfolio.json");

/// How item-level authoring defects are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Fail the whole load on the first defective item.
    Strict,
    /// Drop defective items with a logged warning.
    #[default]
    Lenient,
}

/// Why an item was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    Invalid(ItemValidationError),
    DuplicateId,
}

impl Display for DropReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::DuplicateId => write!(f, "duplicate id"),
        }
    }
}

/// Item removed during a lenient load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedItem {
    /// Raw id as authored (may itself be the defect).
    pub id: String,
    pub reason: DropReason,
}

/// Successful load result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoad {
    pub catalog: ContentCatalog,
    /// Empty under `LoadPolicy::Strict`.
    pub dropped: Vec<DroppedItem>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    locales: LocaleSettings,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    items: Vec<RawItem>,
    #[serde(default)]
    resumes: Vec<ResumeDocument>,
}

/// Item as authored; the id is validated after decoding so a lenient load
/// can drop a badly named item instead of rejecting the file.
#[derive(Debug, Deserialize)]
struct RawItem {
    id: String,
    #[serde(rename = "type")]
    kind: ItemKind,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    links: ItemLinks,
    #[serde(default)]
    localized: BTreeMap<String, LocalizedContent>,
}

impl RawItem {
    fn into_item(self) -> Result<Item, ItemValidationError> {
        let mut item = Item::new(ItemId::parse(self.id)?, self.kind);
        item.skills = self.skills;
        item.image = self.image;
        item.links = self.links;
        item.localized = self.localized;
        Ok(item)
    }
}

impl ContentCatalog {
    /// Loads the catalog compiled into this crate.
    pub fn bundled(policy: LoadPolicy) -> CatalogResult<CatalogLoad> {
        Self::from_json_str(BUNDLED_CATALOG_JSON, policy)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>, policy: LoadPolicy) -> CatalogResult<CatalogLoad> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw, policy)
    }

    /// Loads a catalog from JSON text.
    pub fn from_json_str(json: &str, policy: LoadPolicy) -> CatalogResult<CatalogLoad> {
        let started_at = Instant::now();
        let document: CatalogDocument = serde_json::from_str(json).map_err(|err| {
            warn!(
                "event=catalog_load module=catalog status=error error_code=json_invalid error={}",
                err
            );
            CatalogError::from(err)
        })?;

        let mut pending = Vec::with_capacity(document.items.len());
        let mut dropped = Vec::new();
        for raw in document.items {
            let raw_id = raw.id.clone();
            match raw.into_item() {
                Ok(item) => pending.push(item),
                Err(err) => {
                    reject_item(policy, raw_id, DropReason::Invalid(err), &mut dropped)?;
                }
            }
        }

        let mut load = Self::from_parts(
            document.locales,
            document.categories,
            pending,
            document.resumes,
            policy,
        )?;
        dropped.append(&mut load.dropped);
        load.dropped = dropped;

        info!(
            "event=catalog_load module=catalog status=ok items={} categories={} dropped={} duration_ms={}",
            load.catalog.items.len(),
            load.catalog.categories.len(),
            load.dropped.len(),
            started_at.elapsed().as_millis()
        );
        Ok(load)
    }

    /// Validates already-typed records and assembles a catalog.
    ///
    /// # Errors
    /// - Invalid locale settings, categories or résumé documents.
    /// - Under `LoadPolicy::Strict`, the first invalid or duplicate item.
    pub fn from_parts(
        locales: LocaleSettings,
        categories: Vec<Category>,
        items: Vec<Item>,
        resumes: Vec<ResumeDocument>,
        policy: LoadPolicy,
    ) -> CatalogResult<CatalogLoad> {
        locales.validate()?;
        validate_categories(&categories)?;
        validate_resumes(&resumes, &locales)?;

        let default_locale = locales.default.clone();
        let mut seen_ids = BTreeSet::new();
        let mut kept = Vec::with_capacity(items.len());
        let mut dropped = Vec::new();
        for item in items {
            let id = item.id().as_str().to_string();
            if let Err(err) = item.validate(&default_locale) {
                reject_item(policy, id, DropReason::Invalid(err), &mut dropped)?;
                continue;
            }
            if !seen_ids.insert(id.clone()) {
                reject_item(policy, id, DropReason::DuplicateId, &mut dropped)?;
                continue;
            }
            kept.push(item);
        }

        Ok(CatalogLoad {
            catalog: ContentCatalog {
                locales,
                categories,
                items: kept,
                resumes,
            },
            dropped,
        })
    }
}

fn reject_item(
    policy: LoadPolicy,
    id: String,
    reason: DropReason,
    dropped: &mut Vec<DroppedItem>,
) -> CatalogResult<()> {
    match policy {
        LoadPolicy::Strict => Err(match reason {
            DropReason::Invalid(source) => CatalogError::InvalidItem { id, source },
            DropReason::DuplicateId => CatalogError::DuplicateItemId(id),
        }),
        LoadPolicy::Lenient => {
            warn!(
                "event=catalog_item_dropped module=catalog status=warn item_id={} reason={}",
                id, reason
            );
            dropped.push(DroppedItem { id, reason });
            Ok(())
        }
    }
}

fn validate_categories(categories: &[Category]) -> CatalogResult<()> {
    let mut seen = BTreeSet::new();
    for category in categories {
        let id = category.id.trim();
        if id.is_empty() {
            return Err(CatalogError::InvalidCategory(
                "category id must not be blank".to_string(),
            ));
        }
        if !seen.insert(id) {
            return Err(CatalogError::InvalidCategory(format!(
                "duplicate category id `{id}`"
            )));
        }
        if category.skills.iter().any(|skill| skill.trim().is_empty()) {
            return Err(CatalogError::InvalidCategory(format!(
                "category `{id}` declares a blank skill"
            )));
        }
    }
    Ok(())
}

fn validate_resumes(resumes: &[ResumeDocument], locales: &LocaleSettings) -> CatalogResult<()> {
    let mut seen = BTreeSet::new();
    for resume in resumes {
        if resume.path.trim().is_empty() {
            return Err(CatalogError::InvalidResume(format!(
                "resume for `{}` has a blank path",
                resume.locale
            )));
        }
        if !seen.insert(resume.locale.as_str()) {
            return Err(CatalogError::InvalidResume(format!(
                "duplicate resume for locale `{}`",
                resume.locale
            )));
        }
    }

    if !resumes.is_empty() && !seen.contains(locales.default.as_str()) {
        return Err(CatalogError::InvalidResume(format!(
            "no resume for default locale `{}`",
            locales.default
        )));
    }
    Ok(())
}
