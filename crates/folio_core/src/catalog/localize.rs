//! Locale-keyed content lookup with default-locale fallback.

use crate::catalog::store::{CatalogError, CatalogResult};
use crate::model::item::{Item, LocalizedContent};

/// Localized content plus the locale it was actually read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<'a> {
    /// Key of the record that was used.
    pub locale: &'a str,
    pub content: &'a LocalizedContent,
    /// `true` when the requested locale had no record.
    pub fell_back: bool,
}

/// Returns `item`'s content for `locale`, falling back to `default_locale`.
///
/// # Errors
/// - `CatalogError::MissingDefaultContent` when neither record exists. A
///   loaded catalog never produces this for `default_locale` equal to the
///   catalog default.
pub fn localize<'a>(
    item: &'a Item,
    locale: &str,
    default_locale: &str,
) -> CatalogResult<&'a LocalizedContent> {
    localize_with_source(item, locale, default_locale).map(|localized| localized.content)
}

/// Same lookup as [`localize`], reporting which record was used.
pub fn localize_with_source<'a>(
    item: &'a Item,
    locale: &str,
    default_locale: &str,
) -> CatalogResult<Localized<'a>> {
    if let Some((key, content)) = item.localized.get_key_value(locale) {
        return Ok(Localized {
            locale: key.as_str(),
            content,
            fell_back: false,
        });
    }

    match item.localized.get_key_value(default_locale) {
        Some((key, content)) => Ok(Localized {
            locale: key.as_str(),
            content,
            fell_back: true,
        }),
        None => Err(CatalogError::MissingDefaultContent {
            item: item.id().clone(),
            locale: default_locale.to_string(),
        }),
    }
}
