//! Locale settings and resolution.
//!
//! # Responsibility
//! - Describe which language codes the site offers and which one is the
//!   fallback.
//! - Resolve an externally owned "current locale" to an effective one.
//!
//! # Invariants
//! - `resolve_locale` is total: an unsupported code is not an error, it
//!   resolves to the default.
//! - `LocaleSettings::validate` guarantees the default is supported.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Returns `requested` when it is a member of `supported`, else `default`.
///
/// Membership is an exact string match.
pub fn resolve_locale<'a, S>(requested: &'a str, supported: &S, default: &'a str) -> &'a str
where
    S: LocaleSet + ?Sized,
{
    if supported.contains_code(requested) {
        requested
    } else {
        default
    }
}

/// Membership test over a collection of locale codes.
pub trait LocaleSet {
    fn contains_code(&self, code: &str) -> bool;
}

impl LocaleSet for BTreeSet<String> {
    fn contains_code(&self, code: &str) -> bool {
        self.contains(code)
    }
}

impl LocaleSet for [&str] {
    fn contains_code(&self, code: &str) -> bool {
        self.iter().any(|candidate| *candidate == code)
    }
}

impl<const N: usize> LocaleSet for [&str; N] {
    fn contains_code(&self, code: &str) -> bool {
        self.iter().any(|candidate| *candidate == code)
    }
}

/// One language offered by the site switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedLocale {
    pub code: String,
    /// Native language name shown as the switcher tooltip.
    pub label: String,
}

/// Configured locale set plus its designated default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSettings {
    pub default: String,
    pub supported: Vec<SupportedLocale>,
}

impl LocaleSettings {
    pub fn validate(&self) -> Result<(), LocaleSettingsError> {
        if self.supported.is_empty() {
            return Err(LocaleSettingsError::NoSupportedLocales);
        }

        let mut seen = BTreeSet::new();
        for locale in &self.supported {
            if locale.code.trim().is_empty() {
                return Err(LocaleSettingsError::BlankCode);
            }
            if !seen.insert(locale.code.as_str()) {
                return Err(LocaleSettingsError::DuplicateCode(locale.code.clone()));
            }
        }

        if !seen.contains(self.default.as_str()) {
            return Err(LocaleSettingsError::UnsupportedDefault(self.default.clone()));
        }
        Ok(())
    }

    /// Resolves `requested` against the configured set.
    pub fn resolve<'a>(&'a self, requested: &'a str) -> &'a str {
        resolve_locale(requested, self, self.default.as_str())
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.contains_code(code)
    }

    /// Supported codes in configured order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(|locale| locale.code.as_str())
    }
}

impl LocaleSet for LocaleSettings {
    fn contains_code(&self, code: &str) -> bool {
        self.supported.iter().any(|locale| locale.code == code)
    }
}

/// Locale switcher entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOption {
    pub code: String,
    pub label: String,
    pub active: bool,
}

/// Builds switcher entries with the resolved `current` locale marked active.
pub fn locale_options(settings: &LocaleSettings, current: &str) -> Vec<LocaleOption> {
    let effective = settings.resolve(current);
    settings
        .supported
        .iter()
        .map(|locale| LocaleOption {
            code: locale.code.clone(),
            label: locale.label.clone(),
            active: locale.code == effective,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSettingsError {
    NoSupportedLocales,
    BlankCode,
    DuplicateCode(String),
    UnsupportedDefault(String),
}

impl Display for LocaleSettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSupportedLocales => write!(f, "at least one supported locale is required"),
            Self::BlankCode => write!(f, "locale codes must not be blank"),
            Self::DuplicateCode(code) => write!(f, "duplicate locale code: `{code}`"),
            Self::UnsupportedDefault(code) => {
                write!(f, "default locale `{code}` is not in the supported set")
            }
        }
    }
}

impl Error for LocaleSettingsError {}
