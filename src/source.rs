//! Catalog and price sources.
//!
//! The query layer only sees the [`CatalogSource`] and [`PriceSource`] traits.
//! [`HttpCatalogSource`] serves the catalog from the cached CSGO-API JSON dump
//! and [`SteamMarketSource`] asks the Steam community market for prices.

use std::cell::RefCell;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache::CacheManager;
use crate::config;
use crate::error::{CatalogError, Result};
use crate::models::{CatalogItem, ItemDetail, PriceOverview};

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Supplies the raw category listings and skin metadata.
pub trait CatalogSource {
    /// Every crate-like entry (cases, capsules, music kit boxes, ...) with its type tag.
    fn list_crates(&self) -> Result<Vec<CatalogItem>>;
    fn list_collections(&self) -> Result<Vec<CatalogItem>>;
    fn list_agents(&self) -> Result<Vec<CatalogItem>>;
    fn list_graffiti(&self) -> Result<Vec<CatalogItem>>;
    /// Full skin metadata, used for detail lookups by name.
    fn list_skins(&self) -> Result<Vec<ItemDetail>>;

    /// Drop any locally held copy so the next call fetches fresh data.
    fn refresh(&self) -> Result<()> {
        Ok(())
    }
}

/// Looks up the current market price of one market hash name.
///
/// Implementations must be `Sync`: the detail query issues one lookup per
/// wear tier from concurrent threads.
pub trait PriceSource: Sync {
    fn get_price(&self, market_hash_name: &str) -> Result<PriceOverview>;
}

// ---------------------------------------------------------------------------
// HttpCatalogSource
// ---------------------------------------------------------------------------

/// Catalog backed by cached CSGO-API JSON files.
pub struct HttpCatalogSource {
    /// The cache manager used to download/locate the JSON files.
    pub cache: RefCell<CacheManager>,
}

impl HttpCatalogSource {
    pub fn new(cache: CacheManager) -> Self {
        Self {
            cache: RefCell::new(cache),
        }
    }

    /// Load a cached file and deserialize its top-level array.
    fn load_list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let data = self.cache.borrow_mut().load_json(name)?;
        if !data.is_array() {
            return Err(CatalogError::InvalidArgument(format!(
                "Expected a JSON array in {}, found {}",
                name,
                json_kind(&data)
            )));
        }
        Ok(serde_json::from_value(data)?)
    }
}

impl CatalogSource for HttpCatalogSource {
    fn list_crates(&self) -> Result<Vec<CatalogItem>> {
        self.load_list("crates")
    }

    fn list_collections(&self) -> Result<Vec<CatalogItem>> {
        self.load_list("collections")
    }

    fn list_agents(&self) -> Result<Vec<CatalogItem>> {
        self.load_list("agents")
    }

    fn list_graffiti(&self) -> Result<Vec<CatalogItem>> {
        self.load_list("graffiti")
    }

    fn list_skins(&self) -> Result<Vec<ItemDetail>> {
        self.load_list("skins")
    }

    fn refresh(&self) -> Result<()> {
        self.cache.borrow().clear()
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// SteamMarketSource
// ---------------------------------------------------------------------------

/// Price source querying the Steam community market `priceoverview` endpoint.
pub struct SteamMarketSource {
    client: Client,
    app_id: u32,
    currency: u32,
}

impl SteamMarketSource {
    pub fn new(timeout: Duration, currency: u32) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            app_id: config::CS2_APP_ID,
            currency,
        })
    }
}

impl PriceSource for SteamMarketSource {
    fn get_price(&self, market_hash_name: &str) -> Result<PriceOverview> {
        log::debug!("Fetching market price for {}", market_hash_name);
        let overview = self
            .client
            .get(config::PRICE_OVERVIEW_URL)
            .query(&[
                ("appid", self.app_id.to_string()),
                ("currency", self.currency.to_string()),
                ("market_hash_name", market_hash_name.to_string()),
            ])
            .send()?
            .error_for_status()?
            .json::<PriceOverview>()?;
        Ok(overview)
    }
}
