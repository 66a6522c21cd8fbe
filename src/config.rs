use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Directory holding one `<store>.json` folder file per store.
    pub deals_dir: String,
    /// Path to the recipe collection document.
    pub recipes_path: String,
    /// Store id or "all". Parsed strictly at startup.
    #[serde(default = "default_store_filter")]
    pub store_filter: String,
    /// Initial search query for the deal list.
    #[serde(default)]
    pub search: String,
    /// "store", "name" or "price_now". Parsed strictly at startup.
    #[serde(default = "default_sort_key")]
    pub sort_key: String,
    /// Ingredient matching strategy: "tiered" or "similarity".
    #[serde(default = "default_matcher")]
    pub matcher: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_store_filter() -> String {
    "all".to_string()
}

fn default_sort_key() -> String {
    "store".to_string()
}

fn default_matcher() -> String {
    "tiered".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "deals_dir": "public/v1", "recipes_path": "data/recepten.json" }"#,
        )
        .unwrap();
        assert_eq!(config.store_filter, "all");
        assert_eq!(config.search, "");
        assert_eq!(config.sort_key, "store");
        assert_eq!(config.matcher, "tiered");
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn full_config_overrides_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "deals_dir": "public/v1",
                "recipes_path": "data/recepten.json",
                "store_filter": "lidl",
                "search": "melk",
                "sort_key": "price_now",
                "debounce_ms": 150
            }"#,
        )
        .unwrap();
        assert_eq!(config.store_filter, "lidl");
        assert_eq!(config.sort_key, "price_now");
        assert_eq!(config.debounce_ms, 150);
    }
}
