//! # Language Codes
//!
//! Helpers for the language identifiers flowing between the transcription
//! and translation collaborators and the matching core. The recipe store's
//! seed data and expected query language is Polish.

use unic_langid::LanguageIdentifier;

/// Language the recipe store is queried in
pub const QUERY_LANGUAGE: &str = "pl";

/// Parse a language code such as "pl" or "en-US" into an identifier.
///
/// Returns `None` for strings that are not valid language codes.
pub fn parse_language(code: &str) -> Option<LanguageIdentifier> {
    code.parse().ok()
}

/// The store's query language as an identifier
pub fn query_language() -> LanguageIdentifier {
    QUERY_LANGUAGE
        .parse()
        .expect("query language constant is a valid code")
}

/// Whether a detected language already matches the store's query language
pub fn is_query_language(lang: &LanguageIdentifier) -> bool {
    lang.language.as_str() == QUERY_LANGUAGE
}

/// Human-readable name for the languages the surrounding application offers.
///
/// Unknown codes display as the raw code itself.
pub fn display_name(lang: &LanguageIdentifier) -> String {
    match lang.language.as_str() {
        "pl" => "Polski".to_string(),
        "en" => "English".to_string(),
        "es" => "Español".to_string(),
        "fr" => "Français".to_string(),
        "de" => "Deutsch".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_codes() {
        assert!(parse_language("pl").is_some());
        assert!(parse_language("en").is_some());
        assert!(parse_language("en-US").is_some());
    }

    #[test]
    fn test_parse_invalid_code() {
        assert!(parse_language("not a language code").is_none());
    }

    #[test]
    fn test_query_language_is_polish() {
        let lang = query_language();
        assert!(is_query_language(&lang));
        assert!(!is_query_language(&parse_language("en").unwrap()));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name(&parse_language("pl").unwrap()), "Polski");
        assert_eq!(display_name(&parse_language("de").unwrap()), "Deutsch");
        assert_eq!(display_name(&parse_language("sv").unwrap()), "sv");
    }
}
