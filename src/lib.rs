//! # Recipe Finder
//!
//! A voice-driven recipe search core: recipes live in a JSON-backed store,
//! free-text utterances are reduced to normalized ingredient tokens, and
//! recipes are selected by an all-tokens-must-match substring rule.
//! Speech recognition and machine translation are external collaborators
//! behind narrow capability traits.

pub mod config;
pub mod language;
pub mod matcher;
pub mod pipeline;
pub mod recipe_model;
pub mod speech;
pub mod store;
pub mod translation;
