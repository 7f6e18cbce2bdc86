//! # Recipe Store
//!
//! This module owns the authoritative recipe collection and its on-disk
//! representation, and answers ingredient containment queries.
//!
//! The persisted resource is a single UTF-8 file holding a JSON array of
//! recipe records. The store loads it once at construction; if the file does
//! not exist, the fixed seed set is materialized and immediately written out
//! so it exists for subsequent runs. A file that exists but cannot be parsed
//! is an error the caller decides about; nothing is recovered automatically.
//!
//! The store holds no internal synchronization. Load, save, and filter are
//! meant to be called sequentially by a single owner.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::matcher::recipe_matches;
use crate::recipe_model::{seed_recipes, Recipe};

/// Errors raised by recipe persistence
#[derive(Debug)]
pub enum StoreError {
    /// The recipe file exists but could not be read
    Read(PathBuf, std::io::Error),
    /// The recipe file exists but does not hold the expected record shape
    Parse(PathBuf, serde_json::Error),
    /// The recipe file could not be written
    Write(PathBuf, std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Read(path, err) => {
                write!(f, "failed to read recipe file {}: {err}", path.display())
            }
            StoreError::Parse(path, err) => {
                write!(f, "malformed recipe file {}: {err}", path.display())
            }
            StoreError::Write(path, err) => {
                write!(f, "failed to write recipe file {}: {err}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Read(_, err) | StoreError::Write(_, err) => Some(err),
            StoreError::Parse(_, err) => Some(err),
        }
    }
}

/// In-memory recipe collection backed by a JSON file
#[derive(Debug)]
pub struct RecipeStore {
    path: PathBuf,
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Load the recipe collection from the given file.
    ///
    /// A missing file is not an error: the seed recipes are materialized in
    /// memory and persisted immediately. An existing file that cannot be read
    /// or parsed fails with [`StoreError`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            info!(
                "Recipe file {} not found, materializing {} seed recipes",
                path.display(),
                seed_recipes().len()
            );
            let store = Self {
                path,
                recipes: seed_recipes(),
            };
            store.save()?;
            return Ok(store);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| StoreError::Read(path.clone(), e))?;
        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(|e| StoreError::Parse(path.clone(), e))?;

        info!("Loaded {} recipes from {}", recipes.len(), path.display());
        Ok(Self { path, recipes })
    }

    /// Serialize the current collection to the backing file, replacing its
    /// prior contents entirely.
    pub fn save(&self) -> Result<(), StoreError> {
        // Pretty-printed so the file stays hand-editable.
        let json = serde_json::to_string_pretty(&self.recipes)
            .expect("recipe collection serializes to JSON");
        fs::write(&self.path, json).map_err(|e| StoreError::Write(self.path.clone(), e))?;

        info!("Saved {} recipes to {}", self.recipes.len(), self.path.display());
        Ok(())
    }

    /// Return every recipe, in collection order, whose ingredient list
    /// satisfies all query tokens under the bidirectional substring rule.
    ///
    /// An empty query yields an empty result: no query means no results,
    /// not all of them.
    pub fn filter(&self, query: &[String]) -> Vec<&Recipe> {
        if query.is_empty() {
            debug!("Empty ingredient query, returning no recipes");
            return Vec::new();
        }

        let matched: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| recipe_matches(recipe, query))
            .collect();

        debug!(
            "Query with {} tokens matched {} of {} recipes",
            query.len(),
            matched.len(),
            self.recipes.len()
        );
        matched
    }

    /// All recipes in collection (file) order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
