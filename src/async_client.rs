//! Async wrapper around [`CatalogSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! catalog downloads and price lookups block on the network.
//!
//! # Example
//!
//! ```no_run
//! use cs2_catalog::{AsyncCatalogSdk, CancelToken};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncCatalogSdk::builder().build().await.unwrap();
//!
//!     let cases = sdk.category("Cases").await.unwrap();
//!
//!     let view = sdk
//!         .item_view("AK-47 | Redline", CancelToken::new())
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};

use crate::cancel::CancelToken;
use crate::error::{CatalogError, Result};
use crate::models::{CatalogItem, ItemView, WatchlistEntry};
use crate::{CatalogSdk, CatalogSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncCatalogSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncCatalogSdk`].
///
/// Accepts the same settings as [`CatalogSdkBuilder`]; configure one and
/// hand it over with [`AsyncCatalogSdkBuilder::from_sync`], or use the
/// defaults via [`AsyncCatalogSdk::builder`].
#[derive(Default)]
pub struct AsyncCatalogSdkBuilder {
    inner: CatalogSdkBuilder,
}

impl AsyncCatalogSdkBuilder {
    /// Wrap a fully configured sync builder.
    pub fn from_sync(inner: CatalogSdkBuilder) -> Self {
        Self { inner }
    }

    /// Build the async SDK.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncCatalogSdk> {
        tokio::task::spawn_blocking(move || {
            let sdk = self.inner.build()?;
            Ok(AsyncCatalogSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCatalogSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`CatalogSdk`].
///
/// All operations are dispatched to a blocking thread pool. The underlying
/// [`CatalogSdk`] is protected by a [`Mutex`] since its catalog cache uses
/// `RefCell` internally.
pub struct AsyncCatalogSdk {
    inner: Arc<Mutex<CatalogSdk>>,
}

impl AsyncCatalogSdk {
    /// Create a new builder with default settings.
    pub fn builder() -> AsyncCatalogSdkBuilder {
        AsyncCatalogSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&CatalogSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CatalogSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| CatalogError::LockPoisoned("SDK"))?;
            f(&guard)
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// List a category by its menu label. Unknown labels yield an empty list.
    pub async fn category(&self, label: &str) -> Result<Vec<CatalogItem>> {
        let label = label.to_string();
        self.run(move |s| s.catalog().list_by_label(&label)).await
    }

    /// Build the detail view for an item.
    ///
    /// Cancel the token when the result is no longer wanted (e.g. the view
    /// was closed); the call then resolves to [`CatalogError::Cancelled`].
    pub async fn item_view(&self, name: &str, cancel: CancelToken) -> Result<ItemView> {
        let name = name.to_string();
        self.run(move |s| s.details().view(&name, &cancel)).await
    }

    /// All watchlist entries.
    pub async fn watchlist_entries(&self) -> Result<Vec<WatchlistEntry>> {
        self.run(|s| Ok(s.watchlist().entries())).await
    }

    /// Toggle an entry's watchlist membership; returns the new membership.
    pub async fn toggle_watchlist(&self, entry: WatchlistEntry) -> Result<bool> {
        self.run(move |s| Ok(s.watchlist().toggle(entry))).await
    }

    /// Drop cached catalog data.
    pub async fn refresh(&self) -> Result<()> {
        self.run(|s| s.refresh()).await
    }
}
