mod catalog;
mod config;
mod matcher;
mod model;
mod normalizer;
mod ranker;
mod view;

use catalog::{DealSource, JsonDealSource, JsonRecipeSource, RecipeSource};
use chrono::{Datelike, Utc};
use config::load_config;
use matcher::{Matcher, SimilarityMatcher, TieredMatcher};
use ranker::Ranker;
use std::time::Duration;
use tracing::{error, info, warn};
use view::{DealBrowser, SortKey, StoreFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    // Reject bad filter/sort values up front instead of silently defaulting.
    let store_filter: StoreFilter = match config.store_filter.parse() {
        Ok(filter) => filter,
        Err(e) => {
            error!("Config error: {}", e);
            return;
        }
    };
    let sort_key: SortKey = match config.sort_key.parse() {
        Ok(key) => key,
        Err(e) => {
            error!("Config error: {}", e);
            return;
        }
    };

    info!("Loading catalogs...");
    let deal_source = JsonDealSource::new(&config.deals_dir);
    let recipe_source = JsonRecipeSource::new(&config.recipes_path);
    let (catalog, recipes) = tokio::join!(deal_source.load(), recipe_source.load());

    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Deal catalog load failed: {}", e);
            return;
        }
    };
    // No fallback on the recipe side: a bad document ends the run.
    let recipes = match recipes {
        Ok(recipes) => recipes,
        Err(e) => {
            error!("Recipe catalog load failed: {}", e);
            return;
        }
    };

    let current_week = Utc::now().iso_week().week();
    if catalog.week != 0 && catalog.week != current_week {
        warn!(
            "Catalog is for week {}, current week is {}",
            catalog.week, current_week
        );
    }
    info!(
        "Week {}: {} deals, {} recipes",
        catalog.week,
        catalog.deals.len(),
        recipes.len()
    );

    let matcher: Box<dyn Matcher> = match config.matcher.as_str() {
        "tiered" => Box::new(TieredMatcher),
        "similarity" => Box::new(SimilarityMatcher::default()),
        other => {
            error!("Unknown matcher strategy: {}", other);
            return;
        }
    };
    let ranker = Ranker::new(matcher);
    let suggestions = ranker.rank(&recipes, &catalog.deals);
    info!("Found {} meal suggestions", suggestions.len());
    for suggestion in &suggestions {
        let matched = suggestion.ingredients.iter().filter(|i| i.matched).count();
        info!(
            "{} (serves {}): {:.0}% on offer ({}/{} ingredients)",
            suggestion.recipe.name,
            suggestion.recipe.servings,
            suggestion.score * 100.0,
            matched,
            suggestion.ingredients.len()
        );
        for ingredient in suggestion.ingredients.iter().filter(|i| i.matched) {
            for deal in &ingredient.deals {
                info!(
                    "  {} ({}) -> [{}] {}: {} | {:.2} was {:.2}",
                    ingredient.name,
                    ingredient.quantity,
                    deal.store,
                    deal.name,
                    deal.offer_label,
                    deal.price_now,
                    deal.price_before
                );
            }
        }
    }

    let mut browser = DealBrowser::new(catalog.deals, Duration::from_millis(config.debounce_ms));
    browser.store_filter = store_filter;
    browser.sort_key = sort_key;
    browser.set_query_now(&config.search);

    info!(
        "Deal list (store: {}, query: '{}'):",
        config.store_filter,
        browser.query()
    );
    for deal in browser.visible() {
        info!(
            "  [{}] {} — {} | {:.2} was {:.2}",
            deal.store, deal.name, deal.offer_label, deal.price_now, deal.price_before
        );
    }
}
