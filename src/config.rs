use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub const API_BASE: &str = "https://bymykel.github.io/CSGO-API/api";
pub const PRICE_OVERVIEW_URL: &str = "https://steamcommunity.com/market/priceoverview/";

/// Steam app id of Counter-Strike 2.
pub const CS2_APP_ID: u32 = 730;

/// Steam currency code 1 is USD.
pub const DEFAULT_CURRENCY: u32 = 1;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Key-value slot holding the serialized watchlist.
pub const WATCHLIST_KEY: &str = "watchlist";

/// Shown in place of any price field that could not be looked up.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn json_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("crates", "crates.json"),
        ("collections", "collections.json"),
        ("agents", "agents.json"),
        ("graffiti", "graffiti.json"),
        ("skins", "skins.json"),
    ])
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("cs2-catalog")
    } else {
        PathBuf::from(".cs2-catalog-cache")
    }
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("cs2-catalog")
    } else {
        PathBuf::from(".cs2-catalog-data")
    }
}
