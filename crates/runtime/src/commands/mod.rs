//! Plugin command table.
//!
//! Event scripts issue commands as a name plus whitespace-separated
//! arguments. Handlers are registered by name and looked up on dispatch;
//! names nobody registered are ignored, as the host does for unknown
//! plugin commands.
mod deconstructor;

pub use deconstructor::DeconstructorCommand;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use decon_core::ResolveOutcome;

use crate::error::Result;
use crate::session::Session;

/// What a command did with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran a deconstruction request.
    Processed(ResolveOutcome),
    /// The command name or sub-action is not one this table handles.
    Ignored,
}

impl CommandOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// A named plugin command.
pub trait CommandHandler: Send + Sync {
    /// Name the command is registered under.
    fn name(&self) -> &str;

    /// Runs the command with the arguments that followed its name.
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutcome>;
}

/// Registry of plugin commands keyed by name.
pub struct CommandRegistry {
    lookup_table: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            lookup_table: HashMap::new(),
        }
    }

    /// Creates a registry holding the deconstructor command under `command_name`.
    pub fn with_defaults(command_name: &str) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DeconstructorCommand::new(command_name)));
        registry
    }

    /// Registers a handler, replacing any handler with the same name.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        let name = handler.name().to_string();
        if self.lookup_table.insert(name.clone(), handler).is_some() {
            debug!("command '{}' re-registered", name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.lookup_table.get(name)
    }

    /// Runs the handler registered under `name`, if any.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[&str],
        session: &mut Session,
    ) -> Result<CommandOutcome> {
        match self.find(name) {
            Some(handler) => handler.execute(args, session),
            None => {
                debug!("no handler for command '{}'", name);
                Ok(CommandOutcome::Ignored)
            }
        }
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.lookup_table.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.lookup_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup_table.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decon_core::MessageSink;

    struct Echo;

    impl CommandHandler for Echo {
        fn name(&self) -> &str {
            "Echo"
        }

        fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutcome> {
            session.messages_mut().add(args.join(" "));
            Ok(CommandOutcome::Ignored)
        }
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let registry = CommandRegistry::with_defaults("Deconstructor");
        let mut session = Session::builder().seed(1).build();

        let outcome = registry
            .dispatch("Salvage", &["process-item", "1"], &mut session)
            .unwrap();

        assert!(outcome.is_ignored());
        assert!(!session.is_ready());
    }

    #[test]
    fn handlers_are_found_by_name() {
        let mut registry = CommandRegistry::with_defaults("Recycle");
        registry.register(Arc::new(Echo));

        assert_eq!(registry.names(), ["Echo", "Recycle"]);
        assert!(registry.find("Deconstructor").is_none());

        let mut session = Session::builder().seed(1).build();
        registry.dispatch("Echo", &["a", "b"], &mut session).unwrap();
        assert_eq!(session.messages().lines(), ["a b"]);
    }

    #[test]
    fn re_registering_replaces_the_handler() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(DeconstructorCommand::new("Deconstructor")));
        registry.register(Arc::new(DeconstructorCommand::new("Deconstructor")));
        assert_eq!(registry.len(), 1);
    }
}
