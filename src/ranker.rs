use crate::matcher::Matcher;
use crate::model::{Deal, MatchedIngredient, MealSuggestion, Recipe};
use tracing::warn;

/// Scores recipes against the deal catalog and orders them by coverage.
pub struct Ranker<M: Matcher> {
    matcher: M,
}

impl<M: Matcher> Ranker<M> {
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    /// Builds one suggestion per recipe that has at least one ingredient on
    /// offer, sorted by coverage score descending. Ties are unordered.
    ///
    /// Each ingredient is matched independently against the full catalog.
    /// Recipes without ingredients are skipped before scoring.
    pub fn rank(&self, recipes: &[Recipe], deals: &[Deal]) -> Vec<MealSuggestion> {
        if recipes.is_empty() || deals.is_empty() {
            return Vec::new();
        }

        let mut suggestions = Vec::new();
        for recipe in recipes {
            if recipe.ingredients.is_empty() {
                warn!("Recipe '{}' has no ingredients, skipping", recipe.name);
                continue;
            }

            let ingredients: Vec<MatchedIngredient> = recipe
                .ingredients
                .iter()
                .map(|ingredient| {
                    MatchedIngredient::new(
                        ingredient.name.clone(),
                        ingredient.quantity.clone(),
                        self.matcher.matches(&ingredient.name, deals),
                    )
                })
                .collect();

            let matched = ingredients.iter().filter(|i| i.matched).count();
            if matched == 0 {
                continue;
            }

            suggestions.push(MealSuggestion {
                recipe: recipe.clone(),
                score: matched as f64 / ingredients.len() as f64,
                ingredients,
            });
        }

        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions
    }
}
