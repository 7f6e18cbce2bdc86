//! # Translation Collaborator Interface
//!
//! Queries reach the matcher in the store's language (Polish); anything the
//! speech collaborator recognized in another language has to be translated
//! first. Translation correctness is an external concern; this module only
//! defines the capability interface and the documented degradation policy:
//! when a single token fails to translate, the lower-cased original token is
//! used unmodified and processing continues. A failed sub-translation never
//! aborts the pipeline.

use log::{debug, warn};
use unic_langid::LanguageIdentifier;

/// Errors raised by translation collaborators
#[derive(Debug, Clone)]
pub enum TranslationError {
    /// The translation service rejected or could not handle the request
    Service(String),
    /// The language pair is not supported by the collaborator
    UnsupportedLanguage(String),
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationError::Service(msg) => write!(f, "Translation service error: {msg}"),
            TranslationError::UnsupportedLanguage(msg) => {
                write!(f, "Unsupported language: {msg}")
            }
        }
    }
}

impl std::error::Error for TranslationError {}

/// Capability interface for a machine-translation collaborator
pub trait Translator: Send + Sync {
    fn translate(
        &self,
        text: &str,
        source: &LanguageIdentifier,
        dest: &LanguageIdentifier,
    ) -> Result<String, TranslationError>;
}

/// A translator that returns its input unchanged.
///
/// The degenerate offline collaborator: with it, the pipeline behaves as if
/// every token had already been in the store's language. Also the natural
/// test double.
#[derive(Debug, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(
        &self,
        text: &str,
        _source: &LanguageIdentifier,
        _dest: &LanguageIdentifier,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}

/// Translate a token list into the destination language, token by token.
///
/// Each successfully translated token is lower-cased and trimmed. A token
/// the collaborator fails on falls back to its lower-cased, trimmed original
/// form; the failure is logged and the rest of the list is still processed.
pub fn translate_tokens(
    translator: &dyn Translator,
    tokens: &[String],
    source: &LanguageIdentifier,
    dest: &LanguageIdentifier,
) -> Vec<String> {
    if tokens.is_empty() {
        return Vec::new();
    }

    tokens
        .iter()
        .map(|token| match translator.translate(token, source, dest) {
            Ok(translated) => {
                debug!("Translated ingredient token '{token}' -> '{translated}'");
                translated.to_lowercase().trim().to_string()
            }
            Err(e) => {
                warn!("Could not translate ingredient token '{token}', keeping original: {e}");
                token.to_lowercase().trim().to_string()
            }
        })
        .collect()
}
