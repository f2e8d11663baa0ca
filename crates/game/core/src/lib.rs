//! Item deconstruction rules.
//!
//! `decon-core` turns an item's note tags into drop tables and resolves a
//! deconstruction request against them. The pieces, leaf first:
//!
//! - [`metadata`] parses `<Key:Value>` note tags and extracts typed entries
//! - [`registry`] maps material names to catalog indices
//! - [`selector`] draws one weighted result
//! - [`forced`] rolls guaranteed quantities
//! - [`engine`] runs a full request through [`DeconstructionEngine`]
//!
//! The host (catalog, party, message window, randomness) is reached only
//! through the traits in [`env`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod forced;
pub mod metadata;
pub mod registry;
pub mod selector;

pub use config::DeconConfig;
pub use engine::{DeconstructionEngine, RepeatPolicy, Resolution, ResolveOutcome, format_template};
pub use env::{
    CatalogItem, ItemCatalog, ItemId, MessageSink, PartyInventory, PcgRng, RngOracle, RollStream,
    compute_seed,
};
pub use error::{DeconError, ErrorSeverity};
pub use forced::ForcedEntry;
pub use metadata::{DropEntry, Metadata, TagValue, extract_entries, tags};
pub use registry::{MaterialRegistry, RegistryError};
pub use selector::{WeightedEntry, select_one};
