use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::NOT_AVAILABLE;

// ---------------------------------------------------------------------------
// Wear — Cosmetic condition tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wear {
    #[serde(rename = "Factory New")]
    FactoryNew,
    #[serde(rename = "Minimal Wear")]
    MinimalWear,
    #[serde(rename = "Field-Tested")]
    FieldTested,
    #[serde(rename = "Well-Worn")]
    WellWorn,
    #[serde(rename = "Battle-Scarred")]
    BattleScarred,
}

impl Wear {
    /// All tiers, best condition first. Price tables follow this order.
    pub const ALL: [Wear; 5] = [
        Wear::FactoryNew,
        Wear::MinimalWear,
        Wear::FieldTested,
        Wear::WellWorn,
        Wear::BattleScarred,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Wear::FactoryNew => "Factory New",
            Wear::MinimalWear => "Minimal Wear",
            Wear::FieldTested => "Field-Tested",
            Wear::WellWorn => "Well-Worn",
            Wear::BattleScarred => "Battle-Scarred",
        }
    }

    /// Steam market key for an item in this wear, e.g. `"AK-47 | Redline (Field-Tested)"`.
    pub fn market_hash_name(&self, item_name: &str) -> String {
        format!("{} ({})", item_name, self.as_str())
    }
}

impl fmt::Display for Wear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        Wear::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| format!("{} is not a valid wear tier.", s))
    }
}

// ---------------------------------------------------------------------------
// PriceOverview — Raw reply of a price source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOverview {
    pub success: bool,
    pub lowest_price: Option<String>,
    pub volume: Option<String>,
    pub median_price: Option<String>,
}

// ---------------------------------------------------------------------------
// PriceQuote — One row of the price table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub wear: Wear,
    pub lowest_price: String,
    pub volume: String,
    pub median_price: String,
}

impl PriceQuote {
    /// Quote with every field set to `"N/A"`.
    pub fn unavailable(wear: Wear) -> Self {
        Self {
            wear,
            lowest_price: NOT_AVAILABLE.to_string(),
            volume: NOT_AVAILABLE.to_string(),
            median_price: NOT_AVAILABLE.to_string(),
        }
    }

    /// Build a quote from a price-source reply.
    ///
    /// An unsuccessful reply yields [`PriceQuote::unavailable`]; a successful
    /// one missing a single field gets `"N/A"` for that field only.
    pub fn from_overview(wear: Wear, overview: PriceOverview) -> Self {
        if !overview.success {
            return Self::unavailable(wear);
        }
        let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        Self {
            wear,
            lowest_price: or_na(overview.lowest_price),
            volume: or_na(overview.volume),
            median_price: or_na(overview.median_price),
        }
    }

    /// True when no field carries a real value.
    pub fn is_unavailable(&self) -> bool {
        self.lowest_price == NOT_AVAILABLE
            && self.volume == NOT_AVAILABLE
            && self.median_price == NOT_AVAILABLE
    }
}
