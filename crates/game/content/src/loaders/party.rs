//! Starting party loader.

use std::collections::BTreeMap;
use std::path::Path;

use decon_core::ItemId;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Initial holdings and game variables for a session.
///
/// ```ron
/// (
///     items: { 1: 3, 5: 1 },
///     variables: { 1: 1 },
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingParty {
    pub items: BTreeMap<ItemId, u32>,
    pub variables: BTreeMap<u32, i64>,
}

/// Loader for starting party state from RON files.
pub struct PartyLoader;

impl PartyLoader {
    pub fn load(path: &Path) -> LoadResult<StartingParty> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Like [`PartyLoader::load`], but a missing file yields an empty party.
    pub fn load_or_default(path: &Path) -> LoadResult<StartingParty> {
        if !path.exists() {
            tracing::debug!("no starting party at {}", path.display());
            return Ok(StartingParty::default());
        }
        Self::load(path)
    }

    pub fn parse(content: &str) -> LoadResult<StartingParty> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse party RON: {}", e))
    }
}
