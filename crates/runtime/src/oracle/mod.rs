//! Runtime implementations of the read-only decon-core oracles.
//!
//! The data is immutable once a session is built; dynamic state lives in
//! [`crate::state`].
mod catalog;

pub use catalog::CatalogOracleImpl;
