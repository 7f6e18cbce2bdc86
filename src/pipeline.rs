//! # Utterance-to-Results Pipeline
//!
//! Glue between the collaborators and the matching core: an utterance comes
//! in as audio or as already-recognized text, its ingredient tokens are
//! extracted, translated into the store's language when needed, and run
//! through the store filter. The result is an immutable [`SearchOutcome`]
//! for the presentation layer to render; no state hides in the matcher.

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

use crate::language::{is_query_language, query_language};
use crate::matcher::extract_ingredients;
use crate::recipe_model::Recipe;
use crate::speech::{transcribe_in_background, Transcriber, TranscriptionRequest};
use crate::store::RecipeStore;
use crate::translation::{translate_tokens, Translator};

/// Everything the presentation layer needs to render one search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The utterance text the tokens were extracted from
    pub text: String,
    /// Language the utterance arrived in
    pub language: LanguageIdentifier,
    /// Normalized ingredient tokens, in store language, extraction order
    pub tokens: Vec<String>,
    /// Matching recipes in collection order
    pub recipes: Vec<Recipe>,
}

/// Search with text already in the store's language.
pub fn search_text(store: &RecipeStore, text: &str) -> SearchOutcome {
    let tokens = extract_ingredients(text);
    let recipes: Vec<Recipe> = store.filter(&tokens).into_iter().cloned().collect();

    info!(
        "Found {} ingredient tokens, {} matching recipes",
        tokens.len(),
        recipes.len()
    );

    SearchOutcome {
        text: text.to_string(),
        language: query_language(),
        tokens,
        recipes,
    }
}

/// Search with recognized text in an arbitrary language.
///
/// Tokens extracted from a non-Polish utterance are translated token by
/// token into the store language first; individual translation failures
/// degrade to the original token (see [`translate_tokens`]).
pub fn search_translated(
    store: &RecipeStore,
    translator: &dyn Translator,
    text: &str,
    source: &LanguageIdentifier,
) -> SearchOutcome {
    let extracted = extract_ingredients(text);

    let tokens = if is_query_language(source) || extracted.is_empty() {
        extracted
    } else {
        info!(
            "Translating {} ingredient tokens from '{}' into the store language",
            extracted.len(),
            source
        );
        translate_tokens(translator, &extracted, source, &query_language())
    };

    let recipes: Vec<Recipe> = store.filter(&tokens).into_iter().cloned().collect();

    info!(
        "Found {} ingredient tokens, {} matching recipes",
        tokens.len(),
        recipes.len()
    );

    SearchOutcome {
        text: text.to_string(),
        language: source.clone(),
        tokens,
        recipes,
    }
}

/// Full voice flow: transcribe on the blocking boundary, then search.
///
/// Transcription failure is a recoverable collaborator error surfaced to the
/// caller; the store is left untouched by it.
pub async fn search_audio(
    store: &RecipeStore,
    transcriber: Arc<dyn Transcriber>,
    translator: &dyn Translator,
    request: TranscriptionRequest,
) -> Result<SearchOutcome> {
    let transcript = transcribe_in_background(transcriber, request)
        .await
        .context("speech recognition failed")?;

    info!(
        "Transcribed utterance in '{}': {} characters",
        transcript.language,
        transcript.text.len()
    );

    Ok(search_translated(
        store,
        translator,
        &transcript.text,
        &transcript.language,
    ))
}

/// Re-run a query over an already-normalized token list.
///
/// Supports incremental refinement: the caller owns the token list, may
/// remove entries the user discarded, and asks again. The matcher treats it
/// as a fresh query each time.
pub fn requery(store: &RecipeStore, tokens: &[String]) -> SearchOutcome {
    let recipes: Vec<Recipe> = store.filter(tokens).into_iter().cloned().collect();

    SearchOutcome {
        text: String::new(),
        language: query_language(),
        tokens: tokens.to_vec(),
        recipes,
    }
}
