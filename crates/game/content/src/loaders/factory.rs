//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use decon_core::{CatalogItem, DeconConfig};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, PartyLoader, StartingParty};

/// Content factory that loads all deconstructor content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── items.ron
/// └── party.ron     (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<DeconConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("no config.toml in {}, using defaults", self.data_dir.display());
            return Ok(DeconConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<CatalogItem>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load starting holdings from `party.ron`, or an empty party when absent.
    pub fn load_party(&self) -> LoadResult<StartingParty> {
        let path = self.data_dir.join("party.ron");
        PartyLoader::load_or_default(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
