//! Active detail item (e.g. the opened blog post).

use crate::model::item::ItemId;

/// Toggle selection of a single item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSelection {
    active: Option<ItemId>,
}

impl DetailSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ItemId> {
        self.active.as_ref()
    }

    /// Opens `id`, or closes it when it is already open.
    pub fn select(&mut self, id: ItemId) {
        if self.active.as_ref() == Some(&id) {
            self.active = None;
        } else {
            self.active = Some(id);
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self, id: &ItemId) -> bool {
        self.active.as_ref() == Some(id)
    }
}
