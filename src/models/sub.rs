use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ItemId
// ---------------------------------------------------------------------------

/// Identifier of a catalog entry.
///
/// The catalog serves string ids (`"skin-65604"`), while watchlists written by
/// older clients may hold plain numbers. Both shapes are accepted and written
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Text(String),
    Number(i64),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Text(s) => f.write_str(s),
            ItemId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rarity {
    pub id: Option<String>,
    pub name: String,
    pub color: Option<String>,
}

// ---------------------------------------------------------------------------
// ItemRef — A collection or crate an item can be found in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: ItemId,
    pub name: String,
    pub image: Option<String>,
}

// ---------------------------------------------------------------------------
// Named — Weapon / category tags on a skin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    pub id: Option<String>,
    pub name: String,
}
