//! # Ingredient Matcher
//!
//! This module turns raw utterance text into a normalized ingredient query
//! and decides recipe membership for that query.
//!
//! ## Features
//!
//! - Punctuation-stripping and lower-casing of free-form utterances
//! - Conjunction-based splitting for Polish and English grocery lists
//!   ("pomidory i cebula", "eggs and cheese"), with a word-by-word fallback
//! - Order-preserving deduplication of extracted tokens
//! - Bidirectional substring membership, so "pomidor" matches "pomidory"
//!   and vice versa
//!
//! The extraction is a best-effort heuristic, not an NLP parser: it assumes
//! ingredients are named as a flat list joined by conjunctions, or as single
//! words. Spoken grocery lists rarely need more. Two consequences are
//! inherited and deliberate: a very short token (one letter) substring-matches
//! almost any ingredient, and a separator occurring inside a multi-word
//! ingredient name fragments that name.

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::recipe_model::Recipe;

/// Conjunction separators tried in order; the first one present in the text
/// wins and splits on all of its occurrences.
pub const INGREDIENT_SEPARATORS: [&str; 5] = [" i ", " and ", " oraz ", " z ", " ze "];

lazy_static! {
    // ASCII punctuation class; diacritics and other letters pass through.
    static ref PUNCTUATION: Regex = Regex::new(r"[[:punct:]]").expect("punctuation class is valid");
}

/// Extract a normalized ingredient query from utterance text.
///
/// Lower-cases the text, strips punctuation, splits on the first matching
/// conjunction separator (or on whitespace when none is present), and
/// deduplicates while preserving first-occurrence order. Empty or
/// whitespace-only input yields an empty list; this function never fails.
///
/// # Examples
///
/// ```rust
/// use recipe_finder::matcher::extract_ingredients;
///
/// assert_eq!(extract_ingredients("Pomidory i cebula"), vec!["pomidory", "cebula"]);
/// assert_eq!(extract_ingredients("jajka ser szynka"), vec!["jajka", "ser", "szynka"]);
/// assert!(extract_ingredients("").is_empty());
/// ```
pub fn extract_ingredients(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let text = text.to_lowercase();
    let text = PUNCTUATION.replace_all(&text, "");

    let mut ingredients: Vec<String> = Vec::new();

    for separator in INGREDIENT_SEPARATORS {
        if text.contains(separator) {
            debug!("Splitting utterance on separator '{}'", separator.trim());
            ingredients = text
                .split(separator)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect();
            break;
        }
    }

    if ingredients.is_empty() {
        trace!("No separator found, falling back to whitespace split");
        ingredients = text
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    let mut unique: Vec<String> = Vec::with_capacity(ingredients.len());
    for ingredient in ingredients {
        if !unique.contains(&ingredient) {
            unique.push(ingredient);
        }
    }

    debug!("Extracted {} ingredient tokens", unique.len());
    unique
}

/// Check whether a query token and a stored ingredient name are equivalent
/// under the bidirectional substring rule.
///
/// Both sides are lower-cased first; either may be a substring of the other.
///
/// # Examples
///
/// ```rust
/// use recipe_finder::matcher::ingredient_matches;
///
/// assert!(ingredient_matches("pomidor", "Pomidory"));
/// assert!(ingredient_matches("ser feta", "ser"));
/// assert!(!ingredient_matches("cebula", "marchew"));
/// ```
pub fn ingredient_matches(token: &str, ingredient: &str) -> bool {
    let token = token.to_lowercase();
    let ingredient = ingredient.to_lowercase();
    ingredient.contains(&token) || token.contains(&ingredient)
}

/// Check whether a recipe satisfies an ingredient query.
///
/// Every query token must match at least one of the recipe's ingredients
/// (AND across tokens, OR across a single token against the ingredient
/// list). An empty query matches nothing: no query means no results.
pub fn recipe_matches(recipe: &Recipe, query: &[String]) -> bool {
    if query.is_empty() {
        return false;
    }

    query.iter().all(|token| {
        recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient_matches(token, ingredient))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty_text() {
        assert!(extract_ingredients("").is_empty());
        assert!(extract_ingredients("   ").is_empty());
        assert!(extract_ingredients("\n\t").is_empty());
    }

    #[test]
    fn test_extract_polish_conjunction() {
        assert_eq!(
            extract_ingredients("pomidory i cebula"),
            vec!["pomidory", "cebula"]
        );
    }

    #[test]
    fn test_extract_english_conjunction() {
        assert_eq!(
            extract_ingredients("eggs and cheese and ham"),
            vec!["eggs", "cheese", "ham"]
        );
    }

    #[test]
    fn test_extract_oraz_and_z_separators() {
        assert_eq!(
            extract_ingredients("makaron oraz pomidory"),
            vec!["makaron", "pomidory"]
        );
        assert_eq!(
            extract_ingredients("placki z ziemniaków"),
            vec!["placki", "ziemniaków"]
        );
    }

    #[test]
    fn test_extract_whitespace_fallback() {
        assert_eq!(
            extract_ingredients("jajka ser szynka"),
            vec!["jajka", "ser", "szynka"]
        );
    }

    #[test]
    fn test_extract_lowercases_text() {
        assert_eq!(
            extract_ingredients("Pomidory I Cebula"),
            vec!["pomidory", "cebula"]
        );
    }

    #[test]
    fn test_extract_strips_punctuation() {
        assert_eq!(
            extract_ingredients("pomidory, cebula, czosnek!"),
            vec!["pomidory", "cebula", "czosnek"]
        );
        // Punctuation is removed before separator matching, so "i," still
        // splits once the comma is gone.
        assert_eq!(
            extract_ingredients("jajka i, ser"),
            vec!["jajka", "ser"]
        );
    }

    #[test]
    fn test_extract_preserves_diacritics() {
        assert_eq!(extract_ingredients("mąka i sól"), vec!["mąka", "sól"]);
    }

    #[test]
    fn test_extract_deduplicates_in_order() {
        assert_eq!(extract_ingredients("cebula i cebula"), vec!["cebula"]);
        assert_eq!(
            extract_ingredients("ser i jajka i ser i cebula"),
            vec!["ser", "jajka", "cebula"]
        );
    }

    #[test]
    fn test_extract_first_separator_wins() {
        // " i " appears, so " and " is never tried even though present.
        assert_eq!(
            extract_ingredients("jajka i ser and szynka"),
            vec!["jajka", "ser and szynka"]
        );
    }

    #[test]
    fn test_extract_multi_word_segments_survive() {
        assert_eq!(
            extract_ingredients("mięso mielone i ser feta"),
            vec!["mięso mielone", "ser feta"]
        );
    }

    #[test]
    fn test_extract_discards_empty_segments() {
        // Leading separator produces an empty first segment; it is dropped.
        assert_eq!(extract_ingredients(" i cebula"), vec!["cebula"]);
    }

    #[test]
    fn test_extract_separator_inside_name_fragments_it() {
        // Inherited heuristic limit: " z " splits a single multi-word
        // ingredient name that happens to contain it.
        assert_eq!(
            extract_ingredients("ser z dziurami"),
            vec!["ser", "dziurami"]
        );
    }

    #[test]
    fn test_ingredient_matches_bidirectional() {
        assert!(ingredient_matches("pomidor", "pomidory"));
        assert!(ingredient_matches("pomidory", "pomidor"));
        assert!(ingredient_matches("ser", "ser feta"));
        assert!(ingredient_matches("ser feta", "ser"));
    }

    #[test]
    fn test_ingredient_matches_case_insensitive() {
        assert!(ingredient_matches("POMIDOR", "pomidory"));
        assert!(ingredient_matches("pomidor", "Pomidory"));
    }

    #[test]
    fn test_ingredient_matches_negative() {
        assert!(!ingredient_matches("cebula", "marchew"));
        assert!(!ingredient_matches("kurczak", "jajka"));
    }

    #[test]
    fn test_short_token_matches_widely() {
        // Inherited heuristic limit: a one-letter token substring-matches
        // almost everything. No minimum-length guard exists.
        assert!(ingredient_matches("e", "cebula"));
        assert!(ingredient_matches("o", "pomidory"));
    }

    #[test]
    fn test_recipe_matches_all_tokens_required() {
        let recipe = Recipe::new("Omlet")
            .with_ingredients(["jajka", "ser", "szynka", "pomidory", "cebula"]);

        assert!(recipe_matches(
            &recipe,
            &["jajka".to_string(), "ser".to_string()]
        ));
        assert!(!recipe_matches(
            &recipe,
            &["jajka".to_string(), "makaron".to_string()]
        ));
    }

    #[test]
    fn test_recipe_matches_empty_query_is_no_match() {
        let recipe = Recipe::new("Omlet").with_ingredients(["jajka"]);
        assert!(!recipe_matches(&recipe, &[]));
    }

    #[test]
    fn test_recipe_with_no_ingredients_never_matches() {
        let recipe = Recipe::new("Pusta potrawa");
        assert!(!recipe_matches(&recipe, &["jajka".to_string()]));
    }

    #[test]
    fn test_recipe_matches_partial_token() {
        let recipe = Recipe::new("Sałatka grecka")
            .with_ingredients(["pomidory", "ogórek", "cebula", "oliwki", "ser feta", "oliwa"]);

        assert!(recipe_matches(&recipe, &["pomidor".to_string()]));
        assert!(recipe_matches(
            &recipe,
            &["pomidor".to_string(), "feta".to_string()]
        ));
    }
}
