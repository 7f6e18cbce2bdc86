//! # Application Configuration
//!
//! Configuration for the recipe search shell: where the recipe file lives
//! and whether language detection is overridden. Values come from the
//! environment (a `.env` file is honored by `main`).

use std::env;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

use crate::language::parse_language;

// Environment variable names
pub const STORE_PATH_VAR: &str = "RECIPE_STORE_PATH";
pub const FORCED_LANGUAGE_VAR: &str = "FORCED_LANGUAGE";

/// Default location of the persisted recipe file
pub const DEFAULT_STORE_PATH: &str = "recipes.json";

/// Configuration for the application shell
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the persisted recipe file
    pub store_path: PathBuf,
    /// Force transcription to this language instead of auto-detecting
    pub forced_language: Option<LanguageIdentifier>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            forced_language: None,
        }
    }
}

impl AppConfig {
    /// Build a configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; an unparsable forced-language
    /// value behaves like auto-detection.
    pub fn from_env() -> Self {
        let store_path = env::var(STORE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));

        let forced_language = env::var(FORCED_LANGUAGE_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .and_then(|value| parse_language(value.trim()));

        Self {
            store_path,
            forced_language,
        }
    }
}
