use tracing::debug;

use decon_core::{DeconConfig, ItemId, ResolveOutcome};

use super::{CommandHandler, CommandOutcome};
use crate::error::{Result, RuntimeError};
use crate::session::Session;

/// Sub-action that deconstructs an item.
pub const PROCESS_ITEM: &str = "process-item";

/// `<command> process-item <variable>`: deconstructs the item whose id is
/// stored in the given game variable.
pub struct DeconstructorCommand {
    name: String,
}

impl DeconstructorCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn process_item(&self, args: &[&str], session: &mut Session) -> Result<CommandOutcome> {
        let variable = parse_variable_id(args.first().copied()).ok_or_else(|| {
            RuntimeError::InvalidArgument {
                command: format!("{} {}", self.name, PROCESS_ITEM),
                reason: format!("expected a variable id, got {:?}", args.first()),
            }
        })?;

        let value = session.variables().value(variable);
        let Ok(id) = u32::try_from(value) else {
            debug!("variable {} holds {}, which is not an item id", variable, value);
            return Ok(CommandOutcome::Processed(ResolveOutcome::NotHeld));
        };

        session
            .deconstruct(ItemId(id))
            .map(CommandOutcome::Processed)
    }
}

impl Default for DeconstructorCommand {
    fn default() -> Self {
        Self::new(DeconConfig::DEFAULT_COMMAND)
    }
}

impl CommandHandler for DeconstructorCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutcome> {
        match args.split_first() {
            Some((&PROCESS_ITEM, rest)) => self.process_item(rest, session),
            _ => {
                debug!("{}: ignoring sub-action {:?}", self.name, args.first());
                Ok(CommandOutcome::Ignored)
            }
        }
    }
}

/// Accepts `12` or `#12`.
fn parse_variable_id(arg: Option<&str>) -> Option<u32> {
    let arg = arg?;
    arg.strip_prefix('#').unwrap_or(arg).parse().ok()
}
