//! Immutable content catalog: loading, validation and lookups.
//!
//! # Responsibility
//! - Parse the static content file into typed records.
//! - Validate every record once, at load time, so render paths never meet
//!   authoring defects.
//! - Offer read-only lookups (items, categories, skills, localized text).
//!
//! # Invariants
//! - A loaded catalog never changes.
//! - Every item in a loaded catalog has default-locale content.
//! - Item ids are unique within the catalog.

pub mod loader;
pub mod localize;
pub mod store;
pub mod text;

pub use loader::{CatalogLoad, DropReason, DroppedItem, LoadPolicy};
pub use localize::{localize, localize_with_source, Localized};
pub use store::{CatalogError, CatalogResult, ContentCatalog};
pub use text::{derive_preview, split_paragraphs};
