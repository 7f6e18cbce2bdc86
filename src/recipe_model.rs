//! # Recipe Data Model
//!
//! This module defines the data structures for recipes as stored on disk and
//! matched against ingredient queries.
//!
//! ## Core Concepts
//!
//! - **Recipe**: a named dish with an ordered ingredient list and free-text
//!   preparation instructions
//! - **Seed recipes**: the fixed default set materialized when no persisted
//!   recipe file exists yet
//!
//! Ingredient order is preserved for display but carries no meaning for
//! matching. A recipe with an empty ingredient list can never satisfy a
//! non-empty query.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_finder::recipe_model::Recipe;
//!
//! let recipe = Recipe::new("Omlet")
//!     .with_ingredients(["jajka", "ser", "szynka"])
//!     .with_instructions("Roztrzep jajka, dodaj pozostałe składniki.");
//!
//! assert_eq!(recipe.ingredients.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single recipe record as persisted in the recipe file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name of the dish (unique in practice, not enforced)
    pub name: String,

    /// Ordered ingredient names; order is display order only
    pub ingredients: Vec<String>,

    /// Free-text preparation instructions; never consulted by matching
    pub instructions: String,
}

impl Recipe {
    /// Create a new recipe with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ingredients: Vec::new(),
            instructions: String::new(),
        }
    }

    /// Set the ingredient list for this recipe
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the preparation instructions for this recipe
    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.instructions = instructions.to_string();
        self
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.ingredients.join(", "))
    }
}

/// The five default recipes written out on first use.
///
/// Names and ingredient lists are relied on by golden tests and must stay
/// exactly as they are, in this order.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Spaghetti Bolognese")
            .with_ingredients([
                "makaron",
                "mięso mielone",
                "pomidory",
                "cebula",
                "czosnek",
                "marchew",
                "seler",
            ])
            .with_instructions("Przygotuj sos z mięsa i warzyw, ugotuj makaron, podawaj razem."),
        Recipe::new("Omlet")
            .with_ingredients(["jajka", "ser", "szynka", "pomidory", "cebula"])
            .with_instructions("Roztrzep jajka, dodaj pozostałe składniki, smaż na patelni."),
        Recipe::new("Sałatka grecka")
            .with_ingredients(["pomidory", "ogórek", "cebula", "oliwki", "ser feta", "oliwa"])
            .with_instructions("Pokrój warzywa, dodaj ser feta i oliwki, polej oliwą."),
        Recipe::new("Placki ziemniaczane")
            .with_ingredients(["ziemniaki", "cebula", "jajka", "mąka", "sól", "pieprz"])
            .with_instructions("Zetrzyj ziemniaki i cebulę, dodaj pozostałe składniki, smaż na patelni."),
        Recipe::new("Rosół")
            .with_ingredients([
                "kurczak",
                "marchew",
                "pietruszka",
                "seler",
                "cebula",
                "por",
                "makaron",
            ])
            .with_instructions("Gotuj kurczaka z warzywami, dodaj przyprawy, podawaj z makaronem."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_builder() {
        let recipe = Recipe::new("Rosół")
            .with_ingredients(["kurczak", "marchew"])
            .with_instructions("Gotuj.");

        assert_eq!(recipe.name, "Rosół");
        assert_eq!(recipe.ingredients, vec!["kurczak", "marchew"]);
        assert_eq!(recipe.instructions, "Gotuj.");
    }

    #[test]
    fn test_recipe_without_ingredients() {
        let recipe = Recipe::new("Pusta potrawa");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_seed_recipes_order_and_names() {
        let seeds = seed_recipes();
        let names: Vec<&str> = seeds.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Spaghetti Bolognese",
                "Omlet",
                "Sałatka grecka",
                "Placki ziemniaczane",
                "Rosół",
            ]
        );
    }

    #[test]
    fn test_seed_recipes_ingredients() {
        let seeds = seed_recipes();

        assert_eq!(
            seeds[0].ingredients,
            vec!["makaron", "mięso mielone", "pomidory", "cebula", "czosnek", "marchew", "seler"]
        );
        assert_eq!(
            seeds[1].ingredients,
            vec!["jajka", "ser", "szynka", "pomidory", "cebula"]
        );
        assert_eq!(
            seeds[4].ingredients,
            vec!["kurczak", "marchew", "pietruszka", "seler", "cebula", "por", "makaron"]
        );
    }

    #[test]
    fn test_recipe_serialization_round_trip() {
        let recipe = Recipe::new("Omlet")
            .with_ingredients(["jajka", "ser"])
            .with_instructions("Smaż na patelni.");

        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();

        assert_eq!(recipe, back);
    }

    #[test]
    fn test_recipe_display() {
        let recipe = Recipe::new("Omlet").with_ingredients(["jajka", "ser"]);
        assert_eq!(format!("{}", recipe), "Omlet (jajka, ser)");
    }
}
