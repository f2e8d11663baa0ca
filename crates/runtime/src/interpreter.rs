//! Event-script interpreter front end.
use tracing::debug;

use crate::commands::{CommandOutcome, CommandRegistry};
use crate::error::Result;
use crate::session::Session;

/// Owns a session and the command table that acts on it.
pub struct Interpreter {
    session: Session,
    commands: CommandRegistry,
}

impl Interpreter {
    /// Creates an interpreter with the deconstructor command registered under
    /// the session's configured name.
    pub fn new(session: Session) -> Self {
        let commands = CommandRegistry::with_defaults(&session.config().command);
        Self::with_commands(session, commands)
    }

    pub fn with_commands(session: Session, commands: CommandRegistry) -> Self {
        Self { session, commands }
    }

    /// Runs one plugin command line such as `Deconstructor process-item 12`.
    ///
    /// Blank lines are ignored.
    pub fn plugin_command(&mut self, line: &str) -> Result<CommandOutcome> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(CommandOutcome::Ignored);
        };
        let args: Vec<&str> = words.collect();

        debug!("plugin command {} {:?}", name, args);
        self.commands.dispatch(name, &args, &mut self.session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}

#[cfg(test)]
mod tests {
    use decon_core::{CatalogItem, DeconConfig, ItemId, PartyInventory};

    use super::*;
    use crate::oracle::CatalogOracleImpl;

    #[test]
    fn uses_the_configured_command_name() {
        let config = DeconConfig {
            command: "Salvage".into(),
            ..DeconConfig::default()
        };
        let catalog = CatalogOracleImpl::from_items([
            CatalogItem::new(ItemId(1), "Crate", 0, "<DeconForced Plank:2>"),
            CatalogItem::new(ItemId(2), "Plank", 0, "<DeconMaterial:Plank>"),
        ]);
        let session = Session::builder()
            .catalog(catalog)
            .config(config)
            .seed(3)
            .holding(ItemId(1), 1)
            .variable(1, 1)
            .build();
        let mut interpreter = Interpreter::new(session);

        let ignored = interpreter
            .plugin_command("Deconstructor process-item 1")
            .unwrap();
        assert!(ignored.is_ignored());

        let outcome = interpreter
            .plugin_command("  Salvage   process-item  1 ")
            .unwrap();
        assert!(!outcome.is_ignored());
        assert_eq!(interpreter.session().party().quantity(ItemId(2)), 2);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let mut interpreter = Interpreter::new(Session::builder().seed(0).build());
        assert!(interpreter.plugin_command("   ").unwrap().is_ignored());
    }
}
