use serde::{Deserialize, Serialize};

use super::sub::{ItemId, Rarity};

// ---------------------------------------------------------------------------
// CatalogItem — One entry of a category listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub image: Option<String>,
    /// Crate kind (`"Case"`, `"Sticker Capsule"`, ...). Only crates carry it.
    #[serde(rename = "type", default)]
    pub type_tag: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rarity: Option<Rarity>,
}
