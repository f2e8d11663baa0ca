//! Traits describing the host around the engine.
//!
//! The item catalog and the RNG are read-only oracles; the party inventory and
//! the message window are mutated through `&mut` during a resolution. The
//! engine never reaches the host any other way.
mod catalog;
mod party;
mod rng;

pub use catalog::{CatalogItem, ItemCatalog, ItemId};
pub use party::{MessageSink, PartyInventory};
pub use rng::{PcgRng, RngOracle, RollStream, compute_seed};
