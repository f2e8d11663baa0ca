//! Data-driven content for the deconstructor.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Item catalogs with note tags (RON)
//! - Starting party holdings and game variables (RON)
//! - Deconstructor configuration (TOML)
//!
//! Loaders produce decon-core types directly; building oracles out of them is
//! left to the runtime.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, PartyLoader, StartingParty};
