use super::RecipeSource;
use crate::model::{CatalogError, Recipe};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the full recipe collection from one JSON document. Unlike the deal
/// side there is no fallback: a read or parse failure fails the load.
pub struct JsonRecipeSource {
    path: PathBuf,
}

impl JsonRecipeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecipeSource for JsonRecipeSource {
    async fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
