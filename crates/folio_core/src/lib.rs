//! Core content-selection logic for the portfolio site.
//! This crate is the single source of truth for filtering and locale rules.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod selection;
pub mod service;

pub use catalog::{
    derive_preview, localize, localize_with_source, split_paragraphs, CatalogError, CatalogLoad,
    CatalogResult, ContentCatalog, DropReason, DroppedItem, LoadPolicy, Localized,
};
pub use config::FolioConfig;
pub use filter::{filter, filter_items, FilterCriteria};
pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget,
};
pub use model::category::Category;
pub use model::item::{Item, ItemId, ItemKind, ItemLinks, ItemValidationError, LocalizedContent};
pub use model::locale::{
    locale_options, resolve_locale, LocaleOption, LocaleSet, LocaleSettings, LocaleSettingsError,
    SupportedLocale,
};
pub use model::resume::ResumeDocument;
pub use selection::{DetailSelection, HandoffSlot, KindSelection, SelectionEvent, SelectionState};
pub use service::blog_service::{BlogError, BlogService, PostSummary, PostView};
pub use service::gallery_service::{
    FilterButton, GalleryCard, GalleryView, ProjectGallery, SkillChip,
};
pub use service::resume_service::ResumeShelf;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
