// Core structs: Store, Deal, Recipe, MealSuggestion
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Fixed set of supermarkets whose folders feed the deal catalog.
///
/// Store names also show up as prefixes in product names ("AH Verse Tomaten"),
/// which is why the normalizer knows this list too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Store {
    Ah,
    Jumbo,
    Plus,
    Kruidvat,
    Lidl,
    Aldi,
    Dirk,
    Vomar,
    Hoogvliet,
    Poiesz,
    Dekamarkt,
    Spar,
    Boni,
    Nettorama,
    Trekpleister,
    Makro,
    Coop,
    Mcd,
    Boons,
}

impl Store {
    pub const ALL: [Store; 19] = [
        Store::Ah,
        Store::Jumbo,
        Store::Plus,
        Store::Kruidvat,
        Store::Lidl,
        Store::Aldi,
        Store::Dirk,
        Store::Vomar,
        Store::Hoogvliet,
        Store::Poiesz,
        Store::Dekamarkt,
        Store::Spar,
        Store::Boni,
        Store::Nettorama,
        Store::Trekpleister,
        Store::Makro,
        Store::Coop,
        Store::Mcd,
        Store::Boons,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Store::Ah => "ah",
            Store::Jumbo => "jumbo",
            Store::Plus => "plus",
            Store::Kruidvat => "kruidvat",
            Store::Lidl => "lidl",
            Store::Aldi => "aldi",
            Store::Dirk => "dirk",
            Store::Vomar => "vomar",
            Store::Hoogvliet => "hoogvliet",
            Store::Poiesz => "poiesz",
            Store::Dekamarkt => "dekamarkt",
            Store::Spar => "spar",
            Store::Boni => "boni",
            Store::Nettorama => "nettorama",
            Store::Trekpleister => "trekpleister",
            Store::Makro => "makro",
            Store::Coop => "coop",
            Store::Mcd => "mcd",
            Store::Boons => "boons",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Store {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Store::ALL
            .iter()
            .copied()
            .find(|store| store.as_str() == s)
            .ok_or_else(|| ViewError::UnknownStore(s.to_string()))
    }
}

/// One discounted product from a store's folder for the current week.
///
/// There is no id; duplicate deals across stores are distinct entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub name: String,
    pub description: String,
    /// Alternate names/sizes covered by the same discount.
    pub items: Vec<String>,
    /// Offer wording, e.g. "1+1" or "2e halve prijs".
    pub offer_label: String,
    pub price_before: f64,
    pub price_now: f64,
    pub store: Store,
}

/// All deals gathered for one folder week.
#[derive(Debug, Clone, Default)]
pub struct DealCatalog {
    pub week: u32,
    pub deals: Vec<Deal>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "naam")]
    pub name: String,
    /// Free text, e.g. "2 stuks". Not parsed.
    #[serde(rename = "hoeveelheid")]
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(rename = "naam")]
    pub name: String,
    #[serde(rename = "porties")]
    pub servings: u32,
    #[serde(rename = "ingredienten")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// An ingredient after matching, with the deals found for it in catalog order.
#[derive(Debug, Clone)]
pub struct MatchedIngredient {
    pub name: String,
    pub quantity: String,
    pub matched: bool,
    pub deals: Vec<Deal>,
}

impl MatchedIngredient {
    /// `matched` is derived from `deals`, keeping the two in sync.
    pub fn new(name: String, quantity: String, deals: Vec<Deal>) -> Self {
        Self {
            name,
            quantity,
            matched: !deals.is_empty(),
            deals,
        }
    }
}

/// A recipe with at least one ingredient on offer, scored by coverage.
#[derive(Debug, Clone)]
pub struct MealSuggestion {
    pub recipe: Recipe,
    /// matched ingredients / total ingredients, in (0, 1].
    pub score: f64,
    /// One entry per recipe ingredient, same order.
    pub ingredients: Vec<MatchedIngredient>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("unknown store filter: {0}")]
    UnknownStore(String),
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}
