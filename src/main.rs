use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufRead, Write};

use recipe_finder::config::AppConfig;
use recipe_finder::pipeline::search_text;
use recipe_finder::store::RecipeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    info!("Loading recipe store from: {}", config.store_path.display());

    // A malformed recipe file is an operator decision, not something to
    // paper over with defaults.
    let store = RecipeStore::load(&config.store_path)
        .with_context(|| format!("could not load recipes from {}", config.store_path.display()))?;

    println!(
        "Loaded {} recipes. Name your ingredients, empty line quits.",
        store.len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let outcome = search_text(&store, line);

        println!("Ingredients: {}", outcome.tokens.join(", "));
        if outcome.recipes.is_empty() {
            println!("No recipes match.");
        } else {
            for recipe in &outcome.recipes {
                println!("  {}", recipe.name);
            }
        }
        println!(
            "Found {} ingredients, {} recipes",
            outcome.tokens.len(),
            outcome.recipes.len()
        );
    }

    Ok(())
}
