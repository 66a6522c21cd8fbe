// View module: the deal list as the user browses it. Store filter,
// debounced free-text search, and sorting.

pub mod debounce;

pub use debounce::Debouncer;

use crate::model::{Deal, Store, ViewError};
use crate::normalizer::normalize;
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Column the deal list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Store,
    Name,
    PriceNow,
}

impl FromStr for SortKey {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "store" => Ok(SortKey::Store),
            "name" => Ok(SortKey::Name),
            "price_now" => Ok(SortKey::PriceNow),
            other => Err(ViewError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Store selection; `All` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFilter {
    #[default]
    All,
    Only(Store),
}

impl FromStr for StoreFilter {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StoreFilter::All)
        } else {
            s.parse::<Store>().map(StoreFilter::Only)
        }
    }
}

/// The deal list pipeline: store filter, then normalized substring search
/// over name, offer label and alternate items, then sort. The input is never
/// mutated; the result is a fresh vec.
///
/// Search here is direct user search, not ingredient inference: plain
/// substring, no token tiers.
pub fn filter_and_sort(
    deals: &[Deal],
    store_filter: StoreFilter,
    query: &str,
    sort_key: SortKey,
) -> Vec<Deal> {
    let needle = normalize(query);
    let mut result: Vec<Deal> = deals
        .iter()
        .filter(|deal| match store_filter {
            StoreFilter::All => true,
            StoreFilter::Only(store) => deal.store == store,
        })
        .filter(|deal| {
            needle.is_empty()
                || normalize(&deal.name).contains(&needle)
                || normalize(&deal.offer_label).contains(&needle)
                || deal
                    .items
                    .iter()
                    .any(|item| normalize(item).contains(&needle))
        })
        .cloned()
        .collect();

    result.sort_by(|a, b| match sort_key {
        SortKey::PriceNow => a.price_now.total_cmp(&b.price_now),
        SortKey::Name => dutch_cmp(&a.name, &b.name),
        SortKey::Store => a
            .store
            .as_str()
            .cmp(b.store.as_str())
            .then_with(|| dutch_cmp(&a.name, &b.name)),
    });
    result
}

/// Name comparison with diacritics folded onto their base letters, so "bébé"
/// sorts next to "bebe" instead of after "z". Raw comparison breaks ties to
/// keep the order total.
fn dutch_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// UI-lifetime state for the deal list. The raw query echoes immediately;
/// the query driving the filter follows after the quiet period.
pub struct DealBrowser {
    deals: Vec<Deal>,
    pub store_filter: StoreFilter,
    pub sort_key: SortKey,
    query: String,
    debounced: Arc<Mutex<String>>,
    debouncer: Debouncer,
    cache: Option<CachedView>,
}

/// Last computed list, keyed on the inputs that produced it.
struct CachedView {
    store_filter: StoreFilter,
    query: String,
    sort_key: SortKey,
    result: Vec<Deal>,
}

impl DealBrowser {
    pub fn new(deals: Vec<Deal>, debounce_window: Duration) -> Self {
        Self {
            deals,
            store_filter: StoreFilter::All,
            sort_key: SortKey::Store,
            query: String::new(),
            debounced: Arc::new(Mutex::new(String::new())),
            debouncer: Debouncer::new(debounce_window),
            cache: None,
        }
    }

    /// Replaces the deal snapshot wholesale. A mix of old and new catalog
    /// entries is never observable.
    pub fn set_deals(&mut self, deals: Vec<Deal>) {
        self.deals = deals;
        self.cache = None;
    }

    /// Immediate echo of the text being typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query currently driving the filter; lags `query()` by the quiet
    /// period.
    pub fn debounced_query(&self) -> String {
        self.debounced.lock().unwrap().clone()
    }

    /// Records an edit. The raw query updates at once; the filtering query
    /// follows after the quiet period, discarding any superseded update.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        let slot = Arc::clone(&self.debounced);
        let value = query.to_string();
        self.debouncer.schedule(move || {
            *slot.lock().unwrap() = value;
        });
    }

    /// Applies a query without waiting out the quiet period, cancelling any
    /// pending update. Used to seed initial state.
    pub fn set_query_now(&mut self, query: &str) {
        self.debouncer.cancel();
        self.query = query.to_string();
        *self.debounced.lock().unwrap() = query.to_string();
    }

    /// The deal list as the UI renders it, recomputed only when one of the
    /// inputs changed since the last call.
    pub fn visible(&mut self) -> &[Deal] {
        let query = self.debounced_query();
        let stale = match &self.cache {
            Some(cached) => {
                cached.store_filter != self.store_filter
                    || cached.sort_key != self.sort_key
                    || cached.query != query
            }
            None => true,
        };
        if stale {
            let result = filter_and_sort(&self.deals, self.store_filter, &query, self.sort_key);
            self.cache = Some(CachedView {
                store_filter: self.store_filter,
                query,
                sort_key: self.sort_key,
                result,
            });
        }
        self.cache
            .as_ref()
            .map(|cached| cached.result.as_slice())
            .unwrap_or(&[])
    }
}
