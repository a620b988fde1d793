//! Project gallery use-cases.
//!
//! # Responsibility
//! - Own the gallery's selection state and apply click events to it.
//! - Produce localized cards for the filtered items.
//! - Consume the skill handed off by the About page exactly once.
//!
//! # Invariants
//! - Cards keep catalog order.
//! - An empty card list is a regular view ("no results"), not an error.

use crate::catalog::store::{CatalogResult, ContentCatalog};
use crate::model::item::{Item, ItemId, ItemKind, ItemLinks};
use crate::selection::handoff::HandoffSlot;
use crate::selection::state::{SelectionEvent, SelectionState};
use log::{debug, info};

/// Skill label on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillChip {
    pub label: String,
    /// Equals the selected skill, ignoring case.
    pub active: bool,
}

/// One rendered gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCard {
    pub id: ItemId,
    pub kind: ItemKind,
    pub title: String,
    pub description: String,
    pub skills: Vec<SkillChip>,
    pub image: Option<String>,
    pub links: ItemLinks,
}

/// Category filter button state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub id: String,
    pub active: bool,
}

/// Gallery page view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub cards: Vec<GalleryCard>,
    /// Number of items in the catalog before filtering.
    pub total: usize,
    pub selection: SelectionState,
}

impl GalleryView {
    pub fn shown(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Gallery facade over a loaded catalog.
pub struct ProjectGallery<'c> {
    catalog: &'c ContentCatalog,
    state: SelectionState,
}

impl<'c> ProjectGallery<'c> {
    pub fn new(catalog: &'c ContentCatalog) -> Self {
        Self {
            catalog,
            state: SelectionState::new(),
        }
    }

    /// Resumes a gallery from a caller-held selection.
    pub fn with_state(catalog: &'c ContentCatalog, state: SelectionState) -> Self {
        Self { catalog, state }
    }

    /// Opens the gallery, consuming a pending handed-off skill.
    ///
    /// The skill is normalized to its authored casing when the catalog
    /// knows it; unknown skills are kept as-is and simply match nothing.
    pub fn with_handoff(catalog: &'c ContentCatalog, slot: &mut HandoffSlot<String>) -> Self {
        let Some(skill) = slot.take() else {
            return Self::new(catalog);
        };

        let skill = catalog
            .canonical_skill(&skill)
            .map(str::to_string)
            .unwrap_or(skill);
        info!("event=handoff_take module=gallery status=ok skill={}", skill);
        Self {
            catalog,
            state: SelectionState::with_skill(skill),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Applies one click event.
    pub fn apply(&mut self, event: SelectionEvent) {
        let next = std::mem::take(&mut self.state).apply(event);
        debug!(
            "event=selection_apply module=gallery status=ok kind={} category={} skill={}",
            next.kind().as_str(),
            next.category().unwrap_or("-"),
            next.skill().unwrap_or("-")
        );
        self.state = next;
    }

    /// Items matching the current selection.
    pub fn items(&self) -> Vec<&'c Item> {
        self.catalog.filter(&self.state)
    }

    /// Builds the localized view for the current selection.
    pub fn view(&self, locale: &str) -> CatalogResult<GalleryView> {
        let cards = self
            .items()
            .into_iter()
            .map(|item| self.card(item, locale))
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(GalleryView {
            cards,
            total: self.catalog.items().len(),
            selection: self.state.clone(),
        })
    }

    /// Category buttons in declaration order.
    pub fn category_buttons(&self) -> Vec<FilterButton> {
        self.catalog
            .categories()
            .iter()
            .map(|category| FilterButton {
                id: category.id.clone(),
                active: self.state.is_category_active(&category.id),
            })
            .collect()
    }

    fn card(&self, item: &Item, locale: &str) -> CatalogResult<GalleryCard> {
        let localized = self.catalog.localized(item, locale)?;
        Ok(GalleryCard {
            id: item.id().clone(),
            kind: item.kind,
            title: localized.content.title.clone(),
            description: localized.content.body.trim().to_string(),
            skills: item
                .skills
                .iter()
                .map(|skill| SkillChip {
                    label: skill.clone(),
                    active: self.state.is_skill_active(skill),
                })
                .collect(),
            image: item.image.clone(),
            links: item.links.clone(),
        })
    }
}
