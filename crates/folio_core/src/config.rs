//! Runtime configuration from environment variables.
//!
//! | Variable               | Meaning                                   |
//! |------------------------|-------------------------------------------|
//! | `FOLIO_CATALOG_PATH`   | JSON catalog file; bundled one if unset   |
//! | `FOLIO_CATALOG_STRICT` | `1`/`true`/`yes` fails loads on bad items |
//! | `FOLIO_LOG_LEVEL`      | `trace|debug|info|warn|error`             |
//!
//! Blank values count as unset.

use crate::catalog::loader::{CatalogLoad, LoadPolicy};
use crate::catalog::store::{CatalogResult, ContentCatalog};
use crate::logging::default_log_level;
use std::path::PathBuf;

pub const ENV_CATALOG_PATH: &str = "FOLIO_CATALOG_PATH";
pub const ENV_CATALOG_STRICT: &str = "FOLIO_CATALOG_STRICT";
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    pub catalog_path: Option<PathBuf>,
    pub load_policy: LoadPolicy,
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            load_policy: LoadPolicy::Lenient,
            log_level: default_log_level().to_string(),
        }
    }
}

impl FolioConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            catalog_path: read(ENV_CATALOG_PATH).map(PathBuf::from),
            load_policy: match read(ENV_CATALOG_STRICT) {
                Some(flag) if is_truthy(&flag) => LoadPolicy::Strict,
                _ => LoadPolicy::Lenient,
            },
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
        }
    }

    /// Loads the configured catalog.
    pub fn load_catalog(&self) -> CatalogResult<CatalogLoad> {
        match &self.catalog_path {
            Some(path) => ContentCatalog::from_path(path, self.load_policy),
            None => ContentCatalog::bundled(self.load_policy),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
