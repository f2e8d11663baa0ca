//! Subcommand implementations.

mod command;
mod inspect;
mod materials;
mod process;

pub use command::RunCommand;
pub use inspect::Inspect;
pub use materials::Materials;
pub use process::Process;

use anyhow::{Context, Result, bail};

use decon_core::{ItemCatalog, ItemId};
use decon_runtime::Session;

/// Resolves an item given by id or by display name.
fn find_item(session: &Session, item: &str) -> Result<ItemId> {
    let catalog = session.catalog();
    if let Ok(id) = item.parse::<u32>() {
        let id = ItemId(id);
        if id.is_reserved() || catalog.item(id).is_none() {
            bail!("No item with id {} in the catalog", id);
        }
        return Ok(id);
    }

    catalog
        .find_by_name(item)
        .map(|found| found.id)
        .with_context(|| format!("No item named '{}' in the catalog", item))
}

/// Prints the party's holdings, one `name x quantity` per line.
fn print_party(session: &Session) {
    println!("{}", console::style("Party").bold());
    if session.party().is_empty() {
        println!("  (empty)");
        return;
    }
    for (id, quantity) in session.party().iter() {
        let name = session
            .catalog()
            .item(id)
            .map_or("?", |item| item.name.as_str());
        println!("  {:>4}  {} x {}", id.0, name, quantity);
    }
}
