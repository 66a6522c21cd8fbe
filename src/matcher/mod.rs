// Matcher module: strategies for linking one ingredient to catalog deals.

pub mod similarity;
pub mod tiered;

pub use similarity::SimilarityMatcher;
pub use tiered::TieredMatcher;

use crate::model::Deal;

/// Strategy for finding the deals that cover a single ingredient.
pub trait Matcher {
    /// Returns the matching subset of `deals`, preserving catalog order.
    /// Each deal appears at most once; no matches yields an empty vec.
    fn matches(&self, ingredient_name: &str, deals: &[Deal]) -> Vec<Deal>;
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn matches(&self, ingredient_name: &str, deals: &[Deal]) -> Vec<Deal> {
        (**self).matches(ingredient_name, deals)
    }
}
