//! Deconstruct items held by the party.

use anyhow::Result;
use clap::Parser;
use console::style;

use decon_core::{ItemCatalog, PartyInventory, ResolveOutcome};
use decon_runtime::Session;

use super::{find_item, print_party};

/// Deconstruct an item held by the party
#[derive(Parser)]
pub struct Process {
    /// Item id or name
    #[arg(value_name = "ITEM")]
    item: String,

    /// Number of units to deconstruct, one request each
    #[arg(short = 'n', long, default_value_t = 1)]
    times: u32,
}

impl Process {
    pub fn execute(self, mut session: Session) -> Result<()> {
        let id = find_item(&session, &self.item)?;
        let name = session
            .catalog()
            .item(id)
            .map(|item| item.name.clone())
            .unwrap_or_default();

        let mut processed = 0;
        for _ in 0..self.times {
            match session.deconstruct(id)? {
                ResolveOutcome::Resolved(_) => processed += 1,
                ResolveOutcome::NotHeld => break,
            }
            for line in session.messages_mut().drain() {
                println!("{line}");
            }
        }

        if processed < self.times {
            println!(
                "{} the party holds no more {} ({} of {} processed)",
                style("stopped:").yellow(),
                name,
                processed,
                self.times
            );
        }
        tracing::info!(
            "processed {} x {}, {} left",
            processed,
            name,
            session.party().quantity(id)
        );

        print_party(&session);
        Ok(())
    }
}
