//! Résumé document selection.
//!
//! A supported locale without its own document (e.g. `ru` while that
//! résumé is withdrawn) gets the default-locale document.

use crate::catalog::store::ContentCatalog;
use crate::model::resume::ResumeDocument;
use log::info;

pub struct ResumeShelf<'c> {
    catalog: &'c ContentCatalog,
}

impl<'c> ResumeShelf<'c> {
    pub fn new(catalog: &'c ContentCatalog) -> Self {
        Self { catalog }
    }

    /// Picks the document for `locale`.
    ///
    /// Returns `None` only when the catalog has no résumé at all.
    pub fn select(&self, locale: &str) -> Option<&'c ResumeDocument> {
        let effective = self.catalog.locales().resolve(locale);
        let default_locale = self.catalog.default_locale();
        let resumes = self.catalog.resumes();

        let selected = resumes
            .iter()
            .find(|resume| resume.locale == effective)
            .or_else(|| resumes.iter().find(|resume| resume.locale == default_locale))?;

        info!(
            "event=resume_select module=resume status=ok requested={} selected={}",
            locale, selected.locale
        );
        Some(selected)
    }
}
