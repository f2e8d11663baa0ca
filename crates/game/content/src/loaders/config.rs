//! Deconstructor configuration loader.

use std::path::Path;

use decon_core::DeconConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for deconstructor configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults from [`DeconConfig::default`].
    pub fn load(path: &Path) -> LoadResult<DeconConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<DeconConfig> {
        let config: DeconConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
