use super::DealSource;
use crate::model::{CatalogError, Deal, DealCatalog, Store};
use async_trait::async_trait;
use futures::future::join_all;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Wire format of one store's folder file, as the extraction pipeline writes
/// it: `{ "week": …, "producten": [ … ] }`. The store itself is not in the
/// file; it is the file name.
#[derive(Debug, Deserialize)]
struct StoreFile {
    week: u32,
    producten: Vec<RawProduct>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    naam: String,
    omschrijving: String,
    items: Vec<String>,
    aanbieding: String,
    prijs_eerst: f64,
    prijs_nu: f64,
}

impl RawProduct {
    fn into_deal(self, store: Store) -> Deal {
        Deal {
            name: self.naam,
            description: self.omschrijving,
            items: self.items,
            offer_label: self.aanbieding,
            price_before: self.prijs_eerst,
            price_now: self.prijs_nu,
            store,
        }
    }
}

/// Reads `<dir>/<store>.json` for every known store, tagging each record
/// with its store. A missing or unreadable store file degrades the catalog
/// with a warning instead of failing the whole load.
pub struct JsonDealSource {
    dir: PathBuf,
}

impl JsonDealSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DealSource for JsonDealSource {
    async fn load(&self) -> Result<DealCatalog, CatalogError> {
        let reads = join_all(
            Store::ALL
                .iter()
                .map(|&store| read_store_file(self.dir.clone(), store)),
        )
        .await;

        let mut catalog = DealCatalog::default();
        for read in reads {
            match read {
                Ok((week, mut deals)) => {
                    // Folder weeks should agree; keep the highest one seen.
                    catalog.week = catalog.week.max(week);
                    catalog.deals.append(&mut deals);
                }
                Err(e) => warn!("Store file skipped: {e}"),
            }
        }
        Ok(catalog)
    }
}

async fn read_store_file(dir: PathBuf, store: Store) -> Result<(u32, Vec<Deal>), CatalogError> {
    let path = dir.join(format!("{store}.json"));
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
    let file: StoreFile =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse { path, source })?;
    let deals = file
        .producten
        .into_iter()
        .map(|product| product.into_deal(store))
        .collect();
    Ok((file.week, deals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_file(week: u32, names: &[&str]) -> String {
        let producten: Vec<String> = names
            .iter()
            .map(|name| {
                format!(
                    r#"{{
                        "naam": "{name}",
                        "omschrijving": "",
                        "items": ["{name} voordeelpak"],
                        "aanbieding": "1+1",
                        "prijs_eerst": 4.0,
                        "prijs_nu": 2.0
                    }}"#
                )
            })
            .collect();
        format!(
            r#"{{ "week": {week}, "producten": [{}] }}"#,
            producten.join(",")
        )
    }

    #[tokio::test]
    async fn merges_store_files_and_tags_each_deal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ah.json"), store_file(8, &["Tomaten"])).unwrap();
        std::fs::write(
            dir.path().join("lidl.json"),
            store_file(8, &["Melk", "Kaas"]),
        )
        .unwrap();

        let catalog = JsonDealSource::new(dir.path()).load().await.unwrap();
        assert_eq!(catalog.week, 8);
        assert_eq!(catalog.deals.len(), 3);
        // Store order of `Store::ALL`, file order within a store.
        assert_eq!(catalog.deals[0].name, "Tomaten");
        assert_eq!(catalog.deals[0].store, Store::Ah);
        assert_eq!(catalog.deals[1].name, "Melk");
        assert_eq!(catalog.deals[1].store, Store::Lidl);
        assert_eq!(catalog.deals[2].items, ["Kaas voordeelpak"]);
    }

    #[tokio::test]
    async fn broken_store_file_degrades_instead_of_failing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ah.json"), store_file(8, &["Tomaten"])).unwrap();
        std::fs::write(dir.path().join("jumbo.json"), "niet te parsen").unwrap();

        let catalog = JsonDealSource::new(dir.path()).load().await.unwrap();
        assert_eq!(catalog.deals.len(), 1);
        assert_eq!(catalog.deals[0].store, Store::Ah);
    }

    #[tokio::test]
    async fn week_is_the_maximum_seen() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ah.json"), store_file(8, &["Tomaten"])).unwrap();
        std::fs::write(dir.path().join("spar.json"), store_file(9, &["Melk"])).unwrap();

        let catalog = JsonDealSource::new(dir.path()).load().await.unwrap();
        assert_eq!(catalog.week, 9);
    }

    #[tokio::test]
    async fn empty_directory_yields_an_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonDealSource::new(dir.path()).load().await.unwrap();
        assert_eq!(catalog.week, 0);
        assert!(catalog.deals.is_empty());
    }
}
