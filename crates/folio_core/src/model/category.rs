//! Curated skill groups used for coarse filtering.

use serde::{Deserialize, Serialize};

/// Named group of skill labels.
///
/// An item belongs to a category when it carries at least one of the
/// declared skills, compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable id, also used as the translation key of the button label.
    pub id: String,
    pub skills: Vec<String>,
}

impl Category {
    pub fn new<I, S>(id: impl Into<String>, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|declared| declared == skill)
    }
}
