//! List the material registry.

use anyhow::Result;
use clap::Parser;
use console::style;

use decon_core::ItemCatalog;
use decon_runtime::Session;

/// List registered materials
#[derive(Parser)]
pub struct Materials;

impl Materials {
    pub fn execute(self, mut session: Session) -> Result<()> {
        let registry = session.initialize()?.clone();

        println!(
            "{} ({})",
            style("Materials").bold(),
            style(registry.len()).cyan()
        );
        for (name, id) in registry.entries() {
            let item = session
                .catalog()
                .item(id)
                .map_or("?", |item| item.name.as_str());
            println!("  {:>4}  {} {}", id.0, style(format!("{name:<20}")).green(), item);
        }

        Ok(())
    }
}
