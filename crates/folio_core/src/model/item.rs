//! Item domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by project cards and blog posts.
//! - Provide skill membership helpers used by the filter engine.
//!
//! # Invariants
//! - `id` is a lowercase slug and never changes after construction.
//! - `skills` keep their authored casing; matching is done by the caller's
//!   chosen rule (exact for categories, case-insensitive for skill clicks).
//! - `localized` has an entry for the catalog default locale once the item
//!   has passed `Item::validate`.

use crate::model::category::Category;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ITEM_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid item id regex"));

/// Stable slug identifying one item inside its catalog.
///
/// The inner value is private so an id cannot be edited in place.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Parses and validates a slug.
    pub fn parse(value: impl Into<String>) -> Result<Self, ItemValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ItemValidationError::EmptyId);
        }
        if !ITEM_ID_RE.is_match(&value) {
            return Err(ItemValidationError::InvalidId(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = ItemValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content type of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Gallery entry with skills, image and links.
    Project,
    /// Blog article with per-language text.
    Post,
}

impl ItemKind {
    /// Stable wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Post => "post",
        }
    }

    /// Parses a wire label; unknown labels yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "project" => Some(Self::Project),
            "post" => Some(Self::Post),
            _ => None,
        }
    }
}

/// Display strings of one item in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedContent {
    pub title: String,
    /// Markdown body (project description or full post text).
    pub body: String,
    /// Publication date as authored, e.g. `2024-03-20`.
    #[serde(default)]
    pub date: Option<String>,
    /// Human readable reading time, already localized.
    #[serde(default)]
    pub read_time: Option<String>,
    /// Localized display tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Authored teaser; derived from `body` when absent.
    #[serde(default)]
    pub preview: Option<String>,
}

impl LocalizedContent {
    /// Title and body only; post metadata stays empty.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            date: None,
            read_time: None,
            tags: Vec::new(),
            preview: None,
        }
    }
}

/// Outbound links of a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLinks {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

/// Canonical catalog record for projects and posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    /// Serialized as `type` to match the content file schema.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Language-neutral labels used for filtering.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub links: ItemLinks,
    /// Display content keyed by locale code.
    pub localized: BTreeMap<String, LocalizedContent>,
}

impl Item {
    /// Creates an item without any localized content.
    pub fn new(id: ItemId, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            skills: Vec::new(),
            image: None,
            links: ItemLinks::default(),
            localized: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Builder helper used by loaders and tests.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Builder helper used by loaders and tests.
    pub fn with_content(mut self, locale: impl Into<String>, content: LocalizedContent) -> Self {
        self.localized.insert(locale.into(), content);
        self
    }

    /// Returns whether the item carries `skill`, ignoring case.
    pub fn has_skill(&self, skill: &str) -> bool {
        let wanted = skill.to_lowercase();
        self.skills
            .iter()
            .any(|candidate| candidate.to_lowercase() == wanted)
    }

    /// Returns whether at least one skill is declared by `category`.
    ///
    /// Comparison is exact on the declared strings.
    pub fn in_category(&self, category: &Category) -> bool {
        self.skills
            .iter()
            .any(|skill| category.contains_skill(skill))
    }

    /// Validates record invariants against the catalog default locale.
    pub fn validate(&self, default_locale: &str) -> Result<(), ItemValidationError> {
        let mut seen = BTreeSet::new();
        for skill in &self.skills {
            if skill.trim().is_empty() {
                return Err(ItemValidationError::BlankSkill);
            }
            if !seen.insert(skill.to_lowercase()) {
                return Err(ItemValidationError::DuplicateSkill(skill.clone()));
            }
        }

        if !self.localized.contains_key(default_locale) {
            return Err(ItemValidationError::MissingDefaultContent {
                locale: default_locale.to_string(),
            });
        }

        for (locale, content) in &self.localized {
            if content.title.trim().is_empty() {
                return Err(ItemValidationError::BlankTitle {
                    locale: locale.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyId,
    InvalidId(String),
    BlankSkill,
    DuplicateSkill(String),
    MissingDefaultContent { locale: String },
    BlankTitle { locale: String },
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "item id must not be empty"),
            Self::InvalidId(value) => {
                write!(f, "item id `{value}` must match [a-z0-9][a-z0-9_-]*")
            }
            Self::BlankSkill => write!(f, "skill labels must not be blank"),
            Self::DuplicateSkill(value) => write!(f, "duplicate skill label: `{value}`"),
            Self::MissingDefaultContent { locale } => {
                write!(f, "missing content for default locale `{locale}`")
            }
            Self::BlankTitle { locale } => write!(f, "blank title for locale `{locale}`"),
        }
    }
}

impl Error for ItemValidationError {}
