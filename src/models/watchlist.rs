use serde::{Deserialize, Serialize};

use super::catalog::CatalogItem;
use super::skin::ItemDetail;
use super::sub::ItemId;

// ---------------------------------------------------------------------------
// WatchlistEntry — One favorited item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// Older clients could save entries without an id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub name: String,
    pub image: Option<String>,
    pub rarity: Option<String>,
}

impl From<&ItemDetail> for WatchlistEntry {
    fn from(detail: &ItemDetail) -> Self {
        Self {
            id: Some(detail.id.clone()),
            name: detail.name.clone(),
            image: detail.image.clone(),
            rarity: detail.rarity.as_ref().map(|r| r.name.clone()),
        }
    }
}

impl From<&CatalogItem> for WatchlistEntry {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            image: item.image.clone(),
            rarity: item.rarity.as_ref().map(|r| r.name.clone()),
        }
    }
}
