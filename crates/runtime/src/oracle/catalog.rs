//! [`decon_core::ItemCatalog`] backed by an in-memory slot table.
use decon_core::{CatalogItem, ItemCatalog, ItemId};

/// Item catalog indexed by id, with the reserved slot 0 always empty.
#[derive(Clone, Debug)]
pub struct CatalogOracleImpl {
    slots: Vec<Option<CatalogItem>>,
}

impl CatalogOracleImpl {
    pub fn new() -> Self {
        Self { slots: vec![None] }
    }

    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut catalog = Self::new();
        for item in items {
            catalog.add(item);
        }
        catalog
    }

    /// Stores `item` at its id, replacing any previous entry there.
    ///
    /// Items with the reserved id are ignored.
    pub fn add(&mut self, item: CatalogItem) {
        if item.id.is_reserved() {
            tracing::warn!("ignoring item '{}' with reserved id 0", item.name);
            return;
        }
        let index = item.id.0 as usize;
        if self.slots.len() <= index {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(item);
    }

    /// First item whose display name matches `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogItem> {
        self.items().find(|item| item.name == name)
    }

    /// All stored items in id order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.slots.iter().flatten()
    }
}

impl Default for CatalogOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemCatalog for CatalogOracleImpl {
    fn item(&self, id: ItemId) -> Option<&CatalogItem> {
        self.slots.get(id.0 as usize)?.as_ref()
    }

    fn len(&self) -> u32 {
        self.slots.len() as u32
    }
}
