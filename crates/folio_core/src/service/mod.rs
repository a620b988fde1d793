//! Page-level use-case services.
//!
//! # Responsibility
//! - Combine catalog lookups, locale resolution and selection state into
//!   the view models each page renders.
//! - Keep presentation layers free of filtering and fallback rules.

pub mod blog_service;
pub mod gallery_service;
pub mod resume_service;
