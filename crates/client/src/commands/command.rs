//! Run a plugin command line against the session.

use anyhow::Result;
use clap::Parser;
use console::style;

use decon_core::ResolveOutcome;
use decon_runtime::{CommandOutcome, Interpreter, Session};

use super::print_party;

/// Run a plugin command line
#[derive(Parser)]
pub struct RunCommand {
    /// Command line, e.g. "Deconstructor process-item 1"
    #[arg(value_name = "LINE")]
    line: String,
}

impl RunCommand {
    pub fn execute(self, session: Session) -> Result<()> {
        let mut interpreter = Interpreter::new(session);

        match interpreter.plugin_command(&self.line)? {
            CommandOutcome::Ignored => {
                println!("{} {}", style("ignored:").yellow(), self.line);
            }
            CommandOutcome::Processed(ResolveOutcome::NotHeld) => {
                println!("{} nothing to deconstruct", style("no-op:").yellow());
            }
            CommandOutcome::Processed(ResolveOutcome::Resolved(_)) => {}
        }

        let mut session = interpreter.into_session();
        for line in session.messages_mut().drain() {
            println!("{line}");
        }
        print_party(&session);
        Ok(())
    }
}
