//! Runtime for the deconstructor rules.
//!
//! This crate hosts the `decon-core` engine the way a running game would: it
//! owns the item catalog, party holdings, game variables and message window,
//! builds the material registry once per session, and routes plugin commands
//! to the engine.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the [`Session`] and its builder
//! - [`commands`] provides the named plugin command table
//! - [`interpreter`] parses plugin command lines
//! - [`oracle`] and [`state`] provide the data the engine reads and mutates
pub mod commands;
pub mod error;
pub mod interpreter;
pub mod oracle;
pub mod session;
pub mod state;

pub use commands::{CommandHandler, CommandOutcome, CommandRegistry, DeconstructorCommand};
pub use error::{Result, RuntimeError};
pub use interpreter::Interpreter;
pub use oracle::CatalogOracleImpl;
pub use session::{Session, SessionBuilder};
pub use state::{MessageLog, PartyState, Variables};
