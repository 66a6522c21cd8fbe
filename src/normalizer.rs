use crate::model::Store;
use once_cell::sync::Lazy;
use regex::Regex;

// Folder data prefixes product names with the store ("AH Verse Tomaten") and
// appends package sizes ("Melk 1L"). Neither carries meaning for matching.
static STORE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    let names = Store::ALL
        .iter()
        .map(|store| store.as_str())
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"^(?:{names})\s+")).unwrap()
});

static SIZE_TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+\s*(?:gram|kg|g|ml|liter|cl|l|stuks|stuk)\b").unwrap());

/// Canonicalizes free text (deal name, ingredient name, search query) into a
/// comparable lowercase form: store prefixes and size tokens stripped, runs of
/// whitespace collapsed to a single space.
///
/// The strip passes run until the text stops changing, so the result is a
/// fixed point: `normalize(normalize(x)) == normalize(x)` for any input.
pub fn normalize(text: &str) -> String {
    let mut out = collapse(&text.to_lowercase());
    loop {
        let stripped = STORE_PREFIX.replace(&out, "");
        let stripped = SIZE_TOKENS.replace_all(&stripped, "");
        let next = collapse(&stripped);
        if next == out {
            return next;
        }
        out = next;
    }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
