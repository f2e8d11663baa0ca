//! Material name registry.
//!
//! Materials are catalog items tagged `<DeconMaterial:Name>`. Drop tables refer
//! to them by `Name`, which is independent of the item's display name. The
//! registry is built once from a full catalog scan and never changes
//! afterwards.

use std::collections::HashMap;

use crate::env::{ItemCatalog, ItemId};
use crate::error::{DeconError, ErrorSeverity};
use crate::metadata::tags;

/// Errors raised while building the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two catalog entries declare the same material name.
    #[error("material {name} is duplicated from {first} to {second}")]
    DuplicateMaterial {
        name: String,
        first: ItemId,
        second: ItemId,
    },
}

impl DeconError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateMaterial { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateMaterial { .. } => "REGISTRY_DUPLICATE_MATERIAL",
        }
    }
}

/// Mapping from material name to catalog index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialRegistry {
    materials: HashMap<String, ItemId>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans catalog slots `1..len` and registers every declared material.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateMaterial`] on the first name declared
    /// by two different items. The partially built registry is discarded.
    pub fn build<C: ItemCatalog + ?Sized>(catalog: &C) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for index in 1..catalog.len() {
            let Some(item) = catalog.item(ItemId(index)) else {
                continue;
            };
            let Some(name) = item.meta.text(tags::MATERIAL) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            registry.register(name, item.id)?;
        }

        Ok(registry)
    }

    /// Registers `name` for `id`.
    ///
    /// Registering the same pair twice is a no-op.
    pub fn register(&mut self, name: &str, id: ItemId) -> Result<(), RegistryError> {
        match self.materials.get(name) {
            Some(&first) if first == id => Ok(()),
            Some(&first) => Err(RegistryError::DuplicateMaterial {
                name: name.to_string(),
                first,
                second: id,
            }),
            None => {
                self.materials.insert(name.to_string(), id);
                Ok(())
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<ItemId> {
        self.materials.get(name).copied()
    }

    /// Number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Registered `(name, id)` pairs ordered by catalog index.
    pub fn entries(&self) -> Vec<(&str, ItemId)> {
        let mut entries: Vec<_> = self
            .materials
            .iter()
            .map(|(name, &id)| (name.as_str(), id))
            .collect();
        entries.sort_by_key(|&(_, id)| id);
        entries
    }
}
