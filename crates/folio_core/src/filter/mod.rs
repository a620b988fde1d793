//! Tag-based filter engine.
//!
//! # Responsibility
//! - Select the items matching a kind, a category and a skill.
//!
//! # Invariants
//! - Predicates combine with AND; inside one predicate skills combine
//!   with OR.
//! - Output is a subsequence of the input in the same relative order.
//! - Filtering is pure: same input and criteria, same output.
//! - No match is an empty result, never an error.

use crate::model::category::Category;
use crate::model::item::{Item, ItemKind};

/// Active filter predicates. `None` disables a predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCriteria<'a> {
    pub kind: Option<ItemKind>,
    /// Matches items sharing at least one declared skill, compared exactly.
    pub category: Option<&'a Category>,
    /// Matches items carrying this skill, compared case-insensitively.
    pub skill: Option<&'a str>,
}

impl<'a> FilterCriteria<'a> {
    pub fn new(
        kind: Option<ItemKind>,
        category: Option<&'a Category>,
        skill: Option<&'a str>,
    ) -> Self {
        Self {
            kind,
            category,
            skill,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.category.is_none() && self.skill.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        let matches_kind = self.kind.map_or(true, |kind| item.kind == kind);
        let matches_category = self
            .category
            .map_or(true, |category| item.in_category(category));
        let matches_skill = self.skill.map_or(true, |skill| item.has_skill(skill));
        matches_kind && matches_category && matches_skill
    }
}

/// Returns the items of `items` matching `criteria`, in input order.
pub fn filter_items<'i>(items: &'i [Item], criteria: &FilterCriteria<'_>) -> Vec<&'i Item> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}

/// Positional form of [`filter_items`].
pub fn filter<'i>(
    items: &'i [Item],
    kind: Option<ItemKind>,
    category: Option<&Category>,
    skill: Option<&str>,
) -> Vec<&'i Item> {
    filter_items(items, &FilterCriteria::new(kind, category, skill))
}

#[cfg(test)]
mod tests {
    use super::{filter, FilterCriteria};
    use crate::model::category::Category;
    use crate::model::item::{Item, ItemId, ItemKind};

    fn item(id: &str, kind: ItemKind, skills: &[&str]) -> Item {
        Item::new(ItemId::parse(id).unwrap(), kind).with_skills(skills.iter().copied())
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|item| item.id().to_string()).collect()
    }

    #[test]
    fn no_criteria_keeps_everything_in_order() {
        let items = vec![
            item("a", ItemKind::Project, &["Docker"]),
            item("b", ItemKind::Post, &[]),
        ];
        assert!(FilterCriteria::default().is_empty());
        assert_eq!(ids(&filter(&items, None, None, None)), vec!["a", "b"]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let security = Category::new("category_security", ["Security"]);
        let items = vec![
            item("a", ItemKind::Project, &["AWS", "Security"]),
            item("b", ItemKind::Project, &["Security"]),
            item("c", ItemKind::Post, &["AWS", "Security"]),
        ];
        let result = filter(&items, Some(ItemKind::Project), Some(&security), Some("aws"));
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn kind_filter_alone() {
        let items = vec![
            item("a", ItemKind::Project, &[]),
            item("b", ItemKind::Post, &[]),
            item("c", ItemKind::Project, &[]),
        ];
        assert_eq!(
            ids(&filter(&items, Some(ItemKind::Project), None, None)),
            vec!["a", "c"]
        );
    }
}
