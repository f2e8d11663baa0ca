//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use decon_core::{CatalogItem, ItemId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One catalog entry as written in `items.ron`.
///
/// `note` holds the raw note text; tags are parsed when the entry becomes a
/// [`CatalogItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub icon_index: u32,
    #[serde(default)]
    pub note: String,
}

impl From<ItemSpec> for CatalogItem {
    fn from(spec: ItemSpec) -> Self {
        CatalogItem::new(spec.id, spec.name, spec.icon_index, &spec.note)
    }
}

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemSpec>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Ids must be unique and non-zero; slot 0 is reserved by the host.
    pub fn load(path: &Path) -> LoadResult<Vec<CatalogItem>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog {}: {}", path.display(), e))
    }

    /// Parse item catalog RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<CatalogItem>> {
        let catalog: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for spec in &catalog.items {
            if spec.id.is_reserved() {
                anyhow::bail!("item '{}' uses reserved id 0", spec.name);
            }
            if !seen.insert(spec.id) {
                anyhow::bail!("item id {} is defined more than once", spec.id);
            }
        }

        Ok(catalog.items.into_iter().map(CatalogItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_and_note_tags() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (id: 1, name: "Potion", icon_index: 176, note: "<DeconResult EmptyBottle:100>"),
                    (id: 2, name: "Empty Bottle", note: "<DeconMaterial:EmptyBottle>"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].icon_index, 176);
        assert_eq!(items[0].meta.text("DeconResult EmptyBottle"), Some("100"));
        assert_eq!(items[1].id, ItemId(2));
        assert_eq!(items[1].icon_index, 0);
        assert_eq!(items[1].meta.text("DeconMaterial"), Some("EmptyBottle"));
    }

    #[test]
    fn rejects_reserved_and_duplicate_ids() {
        let reserved = ItemLoader::parse(r#"(items: [(id: 0, name: "Nothing")])"#);
        assert!(reserved.is_err());

        let duplicate =
            ItemLoader::parse(r#"(items: [(id: 3, name: "A"), (id: 3, name: "B")])"#);
        assert!(duplicate.unwrap_err().to_string().contains("more than once"));
    }
}
