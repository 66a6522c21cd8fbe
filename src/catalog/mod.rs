// Catalog module: the suppliers feeding the engine its two flat lists.

pub mod deals;
pub mod recipes;

pub use deals::JsonDealSource;
pub use recipes::JsonRecipeSource;

use crate::model::{CatalogError, DealCatalog, Recipe};
use async_trait::async_trait;

/// Supplies the week's deal catalog.
#[async_trait]
pub trait DealSource {
    async fn load(&self) -> Result<DealCatalog, CatalogError>;
}

/// Supplies the recipe collection.
#[async_trait]
pub trait RecipeSource {
    async fn load(&self) -> Result<Vec<Recipe>, CatalogError>;
}
