//! Item detail aggregation: skin metadata, per-wear market prices and
//! watchlist membership merged into one [`ItemView`].

use std::thread;

use crate::cancel::CancelToken;
use crate::error::{CatalogError, Result};
use crate::models::{ItemDetail, ItemView, PriceQuote, Wear};
use crate::source::{CatalogSource, PriceSource};
use crate::watchlist::Watchlist;

// ---------------------------------------------------------------------------
// DetailQuery
// ---------------------------------------------------------------------------

/// Query interface for the item detail view.
pub struct DetailQuery<'a> {
    catalog: &'a dyn CatalogSource,
    prices: &'a dyn PriceSource,
    watchlist: &'a Watchlist,
}

impl<'a> DetailQuery<'a> {
    /// Create a new `DetailQuery` bound to the given collaborators.
    pub fn new(
        catalog: &'a dyn CatalogSource,
        prices: &'a dyn PriceSource,
        watchlist: &'a Watchlist,
    ) -> Self {
        Self {
            catalog,
            prices,
            watchlist,
        }
    }

    /// Metadata of the first skin whose name matches `name` exactly.
    ///
    /// Returns [`CatalogError::NotFound`] when no skin matches.
    pub fn get(&self, name: &str) -> Result<ItemDetail> {
        self.catalog
            .list_skins()?
            .into_iter()
            .find(|skin| skin.name == name)
            .ok_or_else(|| CatalogError::NotFound(format!("No item named {}", name)))
    }

    /// Current market quote for every wear tier, in [`Wear::ALL`] order.
    ///
    /// The five lookups run concurrently. A failed lookup never fails the
    /// others; its row is filled with `"N/A"`.
    pub fn prices(&self, name: &str) -> Vec<PriceQuote> {
        fetch_prices(self.prices, name)
    }

    /// Build the full detail view for `name`.
    ///
    /// Metadata, prices and watchlist membership are fetched concurrently.
    /// If `cancel` was tripped by the time everything resolved, the result is
    /// discarded and [`CatalogError::Cancelled`] returned instead.
    pub fn view(&self, name: &str, cancel: &CancelToken) -> Result<ItemView> {
        let price_source = self.prices;
        let watchlist = self.watchlist;

        let (detail, prices, in_watchlist) = thread::scope(|s| {
            let prices = s.spawn(move || fetch_prices(price_source, name));
            let membership = s.spawn(move || watchlist.contains(name));

            let detail = self.get(name);

            let prices = prices.join().unwrap_or_else(|_| {
                log::warn!("Price lookup for {} panicked", name);
                Wear::ALL.map(PriceQuote::unavailable).to_vec()
            });
            let in_watchlist = membership.join().unwrap_or_else(|_| {
                log::warn!("Watchlist check for {} panicked", name);
                false
            });
            (detail, prices, in_watchlist)
        });

        if cancel.is_cancelled() {
            log::debug!("Detail view for {} cancelled before commit", name);
            return Err(CatalogError::Cancelled);
        }

        Ok(ItemView {
            detail: detail?,
            prices,
            in_watchlist,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fetch_prices(source: &dyn PriceSource, name: &str) -> Vec<PriceQuote> {
    thread::scope(|s| {
        let handles: Vec<_> = Wear::ALL
            .into_iter()
            .map(|wear| {
                let handle = s.spawn(move || source.get_price(&wear.market_hash_name(name)));
                (wear, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(wear, handle)| match handle.join() {
                Ok(Ok(overview)) => {
                    if !overview.success {
                        log::debug!("No market data for {}", wear.market_hash_name(name));
                    }
                    PriceQuote::from_overview(wear, overview)
                }
                Ok(Err(e)) => {
                    log::warn!("Price lookup for {} failed: {}", wear.market_hash_name(name), e);
                    PriceQuote::unavailable(wear)
                }
                Err(_) => {
                    log::warn!("Price lookup for {} panicked", wear.market_hash_name(name));
                    PriceQuote::unavailable(wear)
                }
            })
            .collect()
    })
}
