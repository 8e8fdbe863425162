//! Category listings on top of a [`CatalogSource`].
//!
//! Cases, sticker capsules and music kits all come from the crate listing and
//! are told apart by their type tag. The other categories have their own
//! listing and are returned as served.

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::models::CatalogItem;
use crate::source::CatalogSource;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cases,
    Collections,
    Agents,
    StickerCapsules,
    Graffiti,
    MusicKits,
}

impl Category {
    /// Every category, in browse-menu order.
    pub const ALL: [Category; 6] = [
        Category::Cases,
        Category::Collections,
        Category::Agents,
        Category::StickerCapsules,
        Category::Graffiti,
        Category::MusicKits,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cases => "Cases",
            Category::Collections => "Collections",
            Category::Agents => "Agents",
            Category::StickerCapsules => "Sticker Capsules",
            Category::Graffiti => "Graffiti",
            Category::MusicKits => "Music kits",
        }
    }

    /// Type tag a crate must carry to belong to this category, if the
    /// category is served from the crate listing.
    pub fn crate_type(&self) -> Option<&'static str> {
        match self {
            Category::Cases => Some("Case"),
            Category::StickerCapsules => Some("Sticker Capsule"),
            Category::MusicKits => Some("Music Kit Box"),
            Category::Collections | Category::Agents | Category::Graffiti => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Labels match exactly, as shown in the browse menu.
    fn from_str(s: &str) -> std::result::Result<Self, String> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("{} is not a catalog category.", s))
    }
}

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface for category listings.
pub struct CatalogQuery<'a> {
    source: &'a dyn CatalogSource,
}

impl<'a> CatalogQuery<'a> {
    /// Create a new `CatalogQuery` bound to the given source.
    pub fn new(source: &'a dyn CatalogSource) -> Self {
        Self { source }
    }

    /// List every item in `category`.
    ///
    /// Source errors are returned as-is; nothing is retried.
    pub fn list(&self, category: Category) -> Result<Vec<CatalogItem>> {
        match category {
            Category::Cases => self.crates_tagged("Case"),
            Category::StickerCapsules => self.crates_tagged("Sticker Capsule"),
            Category::MusicKits => self.crates_tagged("Music Kit Box"),
            Category::Collections => self.source.list_collections(),
            Category::Agents => self.source.list_agents(),
            Category::Graffiti => self.source.list_graffiti(),
        }
    }

    /// Crates whose type tag equals `tag`.
    fn crates_tagged(&self, tag: &str) -> Result<Vec<CatalogItem>> {
        let crates = self.source.list_crates()?;
        Ok(crates
            .into_iter()
            .filter(|item| item.type_tag.as_deref() == Some(tag))
            .collect())
    }

    /// List a category given its menu label.
    ///
    /// An unknown label is not an error: it yields an empty listing without
    /// touching the source.
    pub fn list_by_label(&self, label: &str) -> Result<Vec<CatalogItem>> {
        match label.parse::<Category>() {
            Ok(category) => self.list(category),
            Err(reason) => {
                log::debug!("{}", reason);
                Ok(Vec::new())
            }
        }
    }

    /// Case-insensitive name substring search within one category.
    pub fn search(&self, category: Category, name: &str) -> Result<Vec<CatalogItem>> {
        let needle = name.to_lowercase();
        Ok(self
            .list(category)?
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect())
    }
}
