use super::Matcher;
use crate::model::Deal;
use crate::normalizer::normalize;

/// Tokens shorter than this are dropped before token matching: Dutch
/// connector words ("de", "en", "met") make short tokens noisy.
const MIN_TOKEN_LEN: usize = 3;

/// Substring matcher with a three-tier fallback, tried in order per deal:
///
/// 1. exact: the whole normalized ingredient appears in the deal name or in
///    one of its alternate items;
/// 2. all-tokens: every ingredient token hits the deal name, or every token
///    hits the same single item;
/// 3. any-token: at least one token hits anywhere.
///
/// High recall on purpose: the output is advisory ("this might be on sale"),
/// so false positives are accepted in exchange for coverage.
pub struct TieredMatcher;

impl Matcher for TieredMatcher {
    fn matches(&self, ingredient_name: &str, deals: &[Deal]) -> Vec<Deal> {
        let needle = normalize(ingredient_name);
        if needle.is_empty() {
            return Vec::new();
        }
        let tokens: Vec<&str> = needle
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
            .collect();

        let mut found = Vec::new();
        for deal in deals {
            let name = normalize(&deal.name);
            let items: Vec<String> = deal.items.iter().map(|item| normalize(item)).collect();

            let exact =
                name.contains(&needle) || items.iter().any(|item| item.contains(&needle));
            // Tokens scattered over different items do not count as a tier-2 hit.
            let all_tokens = || {
                tokens.len() >= 2
                    && (tokens.iter().all(|token| token_hits(token, &name))
                        || items
                            .iter()
                            .any(|item| tokens.iter().all(|token| token_hits(token, item))))
            };
            let any_token = || {
                tokens.iter().any(|token| {
                    token_hits(token, &name) || items.iter().any(|item| token_hits(token, item))
                })
            };

            if exact || all_tokens() || any_token() {
                found.push(deal.clone());
            }
        }
        found
    }
}

/// A token hits a field when the field contains it, or when a whole word of
/// the field (itself long enough to be a token) is contained in the token.
/// The reverse direction is what lets the compound "runderlapjes" find
/// "rund gehakt": the noun hides inside the ingredient token.
fn token_hits(token: &str, field: &str) -> bool {
    field.contains(token)
        || field
            .split_whitespace()
            .any(|word| word.chars().count() >= MIN_TOKEN_LEN && token.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Store;

    fn deal(name: &str, items: &[&str]) -> Deal {
        Deal {
            name: name.to_string(),
            description: String::new(),
            items: items.iter().map(|s| s.to_string()).collect(),
            offer_label: "1+1".to_string(),
            price_before: 4.0,
            price_now: 2.0,
            store: Store::Ah,
        }
    }

    #[test]
    fn exact_substring_in_deal_name() {
        let deals = [deal("AH Verse Tomaten 500g", &[])];
        let found = TieredMatcher.matches("tomaten", &deals);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn exact_substring_in_alternate_item() {
        let deals = [deal("Zuivelpakket", &["Campina halfvolle melk 1L"])];
        let found = TieredMatcher.matches("halfvolle melk", &deals);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn exact_tier_works_without_usable_tokens() {
        // "ei" is below the token length cutoff; tiers 2 and 3 have nothing
        // to work with, yet the exact tier must still return the match.
        let deals = [deal("Eieren 10 stuks", &[])];
        let found = TieredMatcher.matches("ei", &deals);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn all_tokens_against_deal_name() {
        let deals = [deal("Kipfilet naturel 300g", &[])];
        let found = TieredMatcher.matches("kip filet", &deals);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn tokens_scattered_across_items_still_match_via_the_fallback() {
        // "kip" hits one item and "filet" another: that is not an all-tokens
        // hit, but the any-token tier picks the deal up regardless.
        let deals = [deal("Vleespakket", &["Kip drumsticks", "Varkensfilet"])];
        let found = TieredMatcher.matches("kip filet", &deals);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn any_token_fallback_on_compound_ingredient() {
        let deals = [deal("Rund gehakt 500g", &[])];
        let found = TieredMatcher.matches("runderlapjes", &deals);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn unrelated_ingredient_matches_nothing() {
        let deals = [deal("Kipfilet naturel", &["Maiskip filet"])];
        assert!(TieredMatcher.matches("spinazie", &deals).is_empty());
    }

    #[test]
    fn catalog_order_preserved_and_each_deal_once() {
        let deals = [
            deal("Tomaten trostomaat", &[]),
            deal("Komkommer", &[]),
            // qualifies under both the exact and token tiers; must appear once
            deal("Verse tomaten", &["Tomaten cherry 250g"]),
        ];
        let found = TieredMatcher.matches("tomaten", &deals);
        let names: Vec<&str> = found.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Tomaten trostomaat", "Verse tomaten"]);
    }

    #[test]
    fn ingredient_that_normalizes_to_nothing_matches_nothing() {
        let deals = [deal("Verse tomaten", &[])];
        assert!(TieredMatcher.matches("2 stuks", &deals).is_empty());
    }
}
