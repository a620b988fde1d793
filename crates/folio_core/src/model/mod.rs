//! Domain model for portfolio content.
//!
//! # Responsibility
//! - Define the records the catalog is made of (items, categories,
//!   locale settings, résumé documents).
//! - Keep record-level validation next to the record it protects.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId` slug.
//! - Every item carries display content for the catalog default locale.

pub mod category;
pub mod item;
pub mod locale;
pub mod resume;
