//! Filter selection state machine.

use crate::model::item::ItemKind;

/// Kind filter: everything, or one content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindSelection {
    #[default]
    All,
    Only(ItemKind),
}

impl KindSelection {
    /// Filter-engine form: `None` means no kind predicate.
    pub fn as_kind(self) -> Option<ItemKind> {
        match self {
            Self::All => None,
            Self::Only(kind) => Some(kind),
        }
    }

    /// Parses `all` or an item kind label.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(Self::All),
            other => ItemKind::parse(other).map(Self::Only),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(kind) => kind.as_str(),
        }
    }
}

/// User selection events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    SelectCategory(String),
    SelectSkill(String),
    SetKind(KindSelection),
    Reset,
}

/// Currently active filters.
///
/// The initial state has no active filter. Every state is reachable from
/// every other one; there is no terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    kind: KindSelection,
    category: Option<String>,
    skill: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state with `skill` pre-selected (navigation handoff).
    pub fn with_skill(skill: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.select_skill(skill);
        state
    }

    pub fn kind(&self) -> KindSelection {
        self.kind
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn skill(&self) -> Option<&str> {
        self.skill.as_deref()
    }

    /// Toggles `category` and clears the skill filter.
    pub fn select_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.category = if self.category.as_deref() == Some(category.as_str()) {
            None
        } else {
            Some(category)
        };
        self.skill = None;
    }

    /// Toggles `skill` (case-insensitive) and clears the category filter.
    pub fn select_skill(&mut self, skill: impl Into<String>) {
        let skill = skill.into();
        self.skill = if self.is_skill_active(&skill) {
            None
        } else {
            Some(skill)
        };
        self.category = None;
    }

    /// Changes the kind filter; category and skill are left untouched.
    pub fn set_kind(&mut self, kind: KindSelection) {
        self.kind = kind;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pure transition function.
    pub fn apply(mut self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::SelectCategory(category) => self.select_category(category),
            SelectionEvent::SelectSkill(skill) => self.select_skill(skill),
            SelectionEvent::SetKind(kind) => self.set_kind(kind),
            SelectionEvent::Reset => self.reset(),
        }
        self
    }

    pub fn has_active_filters(&self) -> bool {
        self.kind != KindSelection::All || self.category.is_some() || self.skill.is_some()
    }

    pub fn is_category_active(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    pub fn is_skill_active(&self, skill: &str) -> bool {
        self.skill
            .as_deref()
            .is_some_and(|active| active.to_lowercase() == skill.to_lowercase())
    }
}
