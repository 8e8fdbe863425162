use serde::{Deserialize, Serialize};

use super::price::PriceQuote;
use super::sub::{ItemId, ItemRef, Named, Rarity};

// ---------------------------------------------------------------------------
// ItemDetail — Full metadata for one skin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub min_float: Option<f64>,
    pub max_float: Option<f64>,
    #[serde(default)]
    pub collections: Vec<ItemRef>,
    #[serde(default)]
    pub crates: Vec<ItemRef>,
    pub image: Option<String>,
    pub rarity: Option<Rarity>,
    pub weapon: Option<Named>,
    pub category: Option<Named>,
    #[serde(default)]
    pub stattrak: bool,
    #[serde(default)]
    pub souvenir: bool,
}

impl ItemDetail {
    /// Float range formatted for display, e.g. `"0.00 - 0.08"`.
    ///
    /// Returns `None` when either bound is missing.
    pub fn float_range(&self) -> Option<String> {
        match (self.min_float, self.max_float) {
            (Some(min), Some(max)) => Some(format!("{:.2} - {:.2}", min, max)),
            _ => None,
        }
    }

    /// Every collection and crate the item drops from, collections first.
    pub fn sources(&self) -> impl Iterator<Item = &ItemRef> {
        self.collections.iter().chain(self.crates.iter())
    }
}

// ---------------------------------------------------------------------------
// ItemView — Merged detail view model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub detail: ItemDetail,
    /// One quote per wear tier, in [`Wear::ALL`](super::Wear::ALL) order.
    pub prices: Vec<PriceQuote>,
    pub in_watchlist: bool,
}
