use core::fmt;

use crate::metadata::Metadata;

/// Index into the item catalog.
///
/// Index 0 is reserved by the host and never names a real item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl ItemId {
    /// Reserved slot at the head of every catalog.
    pub const RESERVED: Self = Self(0);

    pub const fn is_reserved(self) -> bool {
        self.0 == Self::RESERVED.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only view of the host's item database.
pub trait ItemCatalog: Send + Sync {
    /// Returns the item stored at `id`, if any.
    fn item(&self, id: ItemId) -> Option<&CatalogItem>;

    /// Number of slots in the catalog, including the reserved slot 0.
    ///
    /// Valid ids are `1..len()`.
    fn len(&self) -> u32;

    fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

/// A catalog entry together with its parsed note tags.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub icon_index: u32,
    pub meta: Metadata,
}

impl CatalogItem {
    /// Builds an item and parses its note into [`Metadata`].
    pub fn new(id: ItemId, name: impl Into<String>, icon_index: u32, note: &str) -> Self {
        Self {
            id,
            name: name.into(),
            icon_index,
            meta: Metadata::parse(note),
        }
    }
}
