//! CS2 item catalog SDK for Rust.
//!
//! Browses the CS2 item catalog by category, builds item detail views with
//! live Steam market prices for every wear tier, and keeps a local watchlist
//! of favorited items. Catalog data is downloaded from the CSGO-API JSON dump
//! and cached locally; the watchlist is a JSON array in a key-value store.
//!
//! # Quick start
//!
//! ```no_run
//! use cs2_catalog::{CancelToken, CatalogSdk};
//! use cs2_catalog::queries::Category;
//!
//! let sdk = CatalogSdk::builder().build().unwrap();
//!
//! // Browse a category
//! let cases = sdk.catalog().list(Category::Cases).unwrap();
//!
//! // Open an item and favorite it
//! let view = sdk.details().view("AWP | Dragon Lore", &CancelToken::new()).unwrap();
//! sdk.watchlist().toggle((&view.detail).into());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod cancel;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod source;
pub mod store;
pub mod watchlist;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalogSdk;
pub use cache::CacheManager;
pub use cancel::CancelToken;
pub use error::{CatalogError, Result};
pub use source::{CatalogSource, HttpCatalogSource, PriceSource, SteamMarketSource};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use watchlist::Watchlist;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// CatalogSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogSdk`] instance.
///
/// Use [`CatalogSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogSdkBuilder::build) to create the SDK.
/// Any source or store not injected explicitly is created from the
/// directory/network settings.
pub struct CatalogSdkBuilder {
    cache_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
    max_age: Duration,
    language: String,
    currency: u32,
    catalog: Option<Box<dyn CatalogSource + Send>>,
    prices: Option<Box<dyn PriceSource + Send>>,
    store: Option<Box<dyn KeyValueStore>>,
}

impl Default for CatalogSdkBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            data_dir: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
            max_age: config::DEFAULT_MAX_AGE,
            language: config::DEFAULT_LANGUAGE.to_string(),
            currency: config::DEFAULT_CURRENCY,
            catalog: None,
            prices: None,
            store: None,
        }
    }
}

impl CatalogSdkBuilder {
    /// Set a custom cache directory for catalog files.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/cs2-catalog` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the directory holding the watchlist file.
    ///
    /// If not set, the platform data directory is used
    /// (e.g. `~/.local/share/cs2-catalog` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, catalog files are never downloaded and only previously
    /// cached copies are used. Price lookups are unaffected. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for catalog downloads and price lookups.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how old a cached catalog file may get before it is re-downloaded.
    ///
    /// Defaults to 24 hours.
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Set the catalog language code (e.g. `"en"`, `"de"`). Defaults to `"en"`.
    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Set the Steam market currency code. Defaults to `1` (USD).
    pub fn currency(mut self, currency: u32) -> Self {
        self.currency = currency;
        self
    }

    /// Use a custom catalog source instead of the cached HTTP one.
    pub fn catalog_source<C: CatalogSource + Send + 'static>(mut self, source: C) -> Self {
        self.catalog = Some(Box::new(source));
        self
    }

    /// Use a custom price source instead of the Steam market.
    pub fn price_source<P: PriceSource + Send + 'static>(mut self, source: P) -> Self {
        self.prices = Some(Box::new(source));
        self
    }

    /// Use a custom key-value store for the watchlist.
    pub fn store<S: KeyValueStore + 'static>(mut self, store: S) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Build the SDK.
    ///
    /// Creates the cache and data directories as needed but does **not**
    /// download anything eagerly; catalog files are fetched on first query.
    pub fn build(self) -> Result<CatalogSdk> {
        let catalog: Box<dyn CatalogSource + Send> = match self.catalog {
            Some(catalog) => catalog,
            None => {
                let cache = CacheManager::new(
                    self.cache_dir,
                    self.offline,
                    self.timeout,
                    self.max_age,
                    &self.language,
                )?;
                Box::new(HttpCatalogSource::new(cache))
            }
        };
        let prices: Box<dyn PriceSource + Send> = match self.prices {
            Some(prices) => prices,
            None => Box::new(SteamMarketSource::new(self.timeout, self.currency)?),
        };
        let store: Box<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Box::new(FileStore::new(self.data_dir)?),
        };
        Ok(CatalogSdk {
            catalog,
            prices,
            watchlist: Watchlist::from_boxed(store),
        })
    }
}

// ---------------------------------------------------------------------------
// CatalogSdk
// ---------------------------------------------------------------------------

/// The main entry point for the catalog SDK.
///
/// Owns the catalog source, price source and watchlist, and exposes the
/// query interfaces as lightweight borrowing wrappers.
///
/// Created via [`CatalogSdk::builder()`].
pub struct CatalogSdk {
    catalog: Box<dyn CatalogSource + Send>,
    prices: Box<dyn PriceSource + Send>,
    watchlist: Watchlist,
}

impl CatalogSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CatalogSdkBuilder {
        CatalogSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the category listing interface.
    pub fn catalog(&self) -> queries::CatalogQuery<'_> {
        queries::CatalogQuery::new(self.catalog.as_ref())
    }

    /// Access the item detail interface.
    ///
    /// Detail views combine skin metadata, per-wear prices and the item's
    /// watchlist membership.
    pub fn details(&self) -> queries::DetailQuery<'_> {
        queries::DetailQuery::new(self.catalog.as_ref(), self.prices.as_ref(), &self.watchlist)
    }

    /// Access the persisted watchlist.
    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    // -- Utility methods ---------------------------------------------------

    /// Drop locally cached catalog data so the next query downloads it again.
    ///
    /// The watchlist is not touched.
    pub fn refresh(&self) -> Result<()> {
        self.catalog.refresh()?;
        log::info!("Catalog cache cleared");
        Ok(())
    }

    /// Consume the SDK and release all resources.
    pub fn close(self) {
        drop(self);
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CatalogSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogSdk(watchlist_entries={})",
            self.watchlist.entries().len()
        )
    }
}
