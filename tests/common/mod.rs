//! Shared test fixtures for the catalog SDK integration tests.
//!
//! Provides in-memory fake sources seeded with a small slice of the real
//! catalog, plus a store that fails every call.

#![allow(dead_code)]

use cs2_catalog::models::{CatalogItem, ItemDetail, PriceOverview};
use cs2_catalog::{CancelToken, CatalogError, CatalogSource, KeyValueStore, PriceSource, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

pub fn sample_crates() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "crate-4001",
            "name": "Chroma Case",
            "description": null,
            "type": "Case",
            "first_sale_date": "2015-01-08",
            "image": "https://example.test/chroma.png"
        },
        {
            "id": "crate-4002",
            "name": "Paris 2023 Legends Sticker Capsule",
            "type": "Sticker Capsule",
            "image": "https://example.test/paris.png"
        },
        {
            "id": "crate-4003",
            "name": "Masterminds Music Kit Box",
            "type": "Music Kit Box",
            "image": "https://example.test/masterminds.png"
        },
        {
            "id": "crate-4004",
            "name": "Operation Bravo Case",
            "type": "Case",
            "image": "https://example.test/bravo.png"
        },
        {
            "id": "crate-4005",
            "name": "Cobblestone Souvenir Package",
            "type": "Souvenir",
            "image": "https://example.test/cobble.png"
        },
        {
            "id": "crate-4006",
            "name": "Untagged Crate",
            "type": null,
            "image": null
        }
    ])
}

pub fn sample_collections() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "collection-set-dust-2",
            "name": "The Dust 2 Collection",
            "crates": [],
            "image": "https://example.test/dust2.png"
        },
        {
            "id": "collection-set-cobblestone",
            "name": "The Cobblestone Collection",
            "image": "https://example.test/cobblestone.png"
        }
    ])
}

pub fn sample_agents() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "agent-4613",
            "name": "Sir Bloody Darryl Royale | The Professionals",
            "description": "A veteran of the Professionals.",
            "rarity": {"id": "rarity_ancient_character", "name": "Master", "color": "#eb4b4b"},
            "team": {"id": "terrorists", "name": "Terrorist"},
            "image": "https://example.test/darryl.png"
        }
    ])
}

pub fn sample_graffiti() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "graffiti-1",
            "name": "Sealed Graffiti | Lambda",
            "rarity": {"id": "rarity_common", "name": "Base Grade", "color": "#b0c3d9"},
            "image": "https://example.test/lambda.png"
        }
    ])
}

pub fn sample_skins() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "skin-1",
            "name": "AWP | Dragon Lore",
            "description": "It has been custom painted with a knotwork dragon.",
            "weapon": {"id": "weapon_awp", "weapon_id": 9, "name": "AWP"},
            "category": {"id": "csgo_inventory_weapon_category_sniper_rifles", "name": "Sniper Rifles"},
            "min_float": 0.0,
            "max_float": 0.7,
            "rarity": {"id": "rarity_ancient_weapon", "name": "Covert", "color": "#eb4b4b"},
            "stattrak": false,
            "souvenir": true,
            "collections": [
                {"id": "collection-set-cobblestone", "name": "The Cobblestone Collection", "image": "https://example.test/cobblestone.png"}
            ],
            "crates": [
                {"id": "crate-4005", "name": "Cobblestone Souvenir Package", "image": "https://example.test/cobble.png"}
            ],
            "image": "https://example.test/dlore.png"
        },
        {
            "id": "skin-2",
            "name": "AK-47 | Redline",
            "description": null,
            "min_float": 0.1,
            "max_float": 0.7,
            "rarity": {"id": "rarity_legendary_weapon", "name": "Classified", "color": "#d32ce6"},
            "stattrak": true,
            "crates": [
                {"id": "crate-4001", "name": "Chroma Case", "image": null}
            ],
            "image": "https://example.test/redline.png"
        },
        {
            "id": "skin-3",
            "name": "AWP | Dragon Lore",
            "description": "Duplicate entry; lookups must return the first one.",
            "min_float": 0.5,
            "max_float": 0.6,
            "image": null
        }
    ])
}

/// Write the sample dump as cached catalog files under `<dir>/<language>/`.
pub fn seed_cache(dir: &Path, language: &str) {
    let lang_dir = dir.join(language);
    fs::create_dir_all(&lang_dir).unwrap();
    for (file, data) in [
        ("crates.json", sample_crates()),
        ("collections.json", sample_collections()),
        ("agents.json", sample_agents()),
        ("graffiti.json", sample_graffiti()),
        ("skins.json", sample_skins()),
    ] {
        fs::write(lang_dir.join(file), serde_json::to_string(&data).unwrap()).unwrap();
    }
}

// ---------------------------------------------------------------------------
// FakeCatalog
// ---------------------------------------------------------------------------

/// Catalog source serving the sample data, counting every call.
pub struct FakeCatalog {
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn serve<T: serde::de::DeserializeOwned>(&self, data: serde_json::Value) -> Result<Vec<T>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CatalogError::NotFound("catalog unreachable".into()));
        }
        Ok(serde_json::from_value(data)?)
    }
}

impl CatalogSource for FakeCatalog {
    fn list_crates(&self) -> Result<Vec<CatalogItem>> {
        self.serve(sample_crates())
    }

    fn list_collections(&self) -> Result<Vec<CatalogItem>> {
        self.serve(sample_collections())
    }

    fn list_agents(&self) -> Result<Vec<CatalogItem>> {
        self.serve(sample_agents())
    }

    fn list_graffiti(&self) -> Result<Vec<CatalogItem>> {
        self.serve(sample_graffiti())
    }

    fn list_skins(&self) -> Result<Vec<ItemDetail>> {
        self.serve(sample_skins())
    }
}

// ---------------------------------------------------------------------------
// FakePrices
// ---------------------------------------------------------------------------

/// Price source answering from a fixed table.
///
/// Names in `errors` fail with an error; names missing from the table get an
/// unsuccessful reply. Every queried name is recorded.
#[derive(Default)]
pub struct FakePrices {
    pub table: HashMap<String, PriceOverview>,
    pub errors: HashSet<String>,
    pub queried: Mutex<Vec<String>>,
    /// Tripped on every lookup, to simulate the caller going away mid-flight.
    pub cancel_on_lookup: Option<CancelToken>,
}

impl FakePrices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, market_hash_name: &str, lowest: &str, volume: &str, median: &str) -> Self {
        self.table.insert(
            market_hash_name.to_string(),
            PriceOverview {
                success: true,
                lowest_price: Some(lowest.to_string()),
                volume: Some(volume.to_string()),
                median_price: Some(median.to_string()),
            },
        );
        self
    }

    pub fn with_error(mut self, market_hash_name: &str) -> Self {
        self.errors.insert(market_hash_name.to_string());
        self
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

impl PriceSource for FakePrices {
    fn get_price(&self, market_hash_name: &str) -> Result<PriceOverview> {
        self.queried.lock().unwrap().push(market_hash_name.to_string());
        if let Some(token) = &self.cancel_on_lookup {
            token.cancel();
        }
        if self.errors.contains(market_hash_name) {
            return Err(CatalogError::InvalidArgument("429 Too Many Requests".into()));
        }
        Ok(self.table.get(market_hash_name).cloned().unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// BrokenStore
// ---------------------------------------------------------------------------

/// Store whose every read and write fails.
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read denied",
        )))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "write denied",
        )))
    }
}
