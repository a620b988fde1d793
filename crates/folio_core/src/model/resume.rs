//! Résumé document references.

use serde::{Deserialize, Serialize};

/// One downloadable résumé file for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub locale: String,
    /// Asset path handed to the viewer/download button as-is.
    pub path: String,
}
