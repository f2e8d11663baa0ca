//! Mutable session state: party holdings, the message window and game variables.
mod messages;
mod party;
mod variables;

pub use messages::MessageLog;
pub use party::PartyState;
pub use variables::Variables;
