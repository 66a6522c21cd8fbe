use super::Matcher;
use crate::model::Deal;
use crate::normalizer::normalize;
use strsim::normalized_levenshtein;

/// Minimum similarity for a match; the complement of the 0.4 distance
/// threshold the fuzzy-search variant of the folder UI shipped with.
const DEFAULT_THRESHOLD: f64 = 0.6;

/// Alternate matcher strategy: normalized Levenshtein similarity between the
/// ingredient and the deal name or any alternate item, gated by a threshold.
/// Trades the tiered matcher's recall for tolerance of misspellings.
pub struct SimilarityMatcher {
    threshold: f64,
}

impl SimilarityMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    fn best_score(&self, needle: &str, deal: &Deal) -> f64 {
        let name_score = normalized_levenshtein(needle, &normalize(&deal.name));
        deal.items
            .iter()
            .map(|item| normalized_levenshtein(needle, &normalize(item)))
            .fold(name_score, f64::max)
    }
}

impl Default for SimilarityMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Matcher for SimilarityMatcher {
    fn matches(&self, ingredient_name: &str, deals: &[Deal]) -> Vec<Deal> {
        let needle = normalize(ingredient_name);
        if needle.is_empty() {
            return Vec::new();
        }
        deals
            .iter()
            .filter(|deal| self.best_score(&needle, deal) >= self.threshold)
            .cloned()
            .collect()
    }
}
