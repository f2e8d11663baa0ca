//! Show how an item deconstructs.

use anyhow::Result;
use clap::Parser;
use console::style;

use decon_core::{
    ForcedEntry, ItemCatalog, ItemId, RepeatPolicy, WeightedEntry, extract_entries, tags,
};
use decon_runtime::Session;

use super::find_item;

/// Show the drop table of an item
#[derive(Parser)]
pub struct Inspect {
    /// Item id or name
    #[arg(value_name = "ITEM")]
    item: String,
}

impl Inspect {
    pub fn execute(self, mut session: Session) -> Result<()> {
        let id = find_item(&session, &self.item)?;
        let registry = session.initialize()?.clone();
        let catalog = session.catalog();
        let Some(item) = catalog.item(id) else {
            anyhow::bail!("No item with id {} in the catalog", id);
        };

        let name_of = |material: Option<ItemId>| {
            material
                .and_then(|m| catalog.item(m))
                .map_or_else(|| "nothing".to_string(), |m| m.name.clone())
        };

        println!("{} #{} (icon {})", style(&item.name).bold(), id, item.icon_index);

        let weighted: Vec<WeightedEntry> = extract_entries(&item.meta, tags::RESULT, &registry);
        let forced: Vec<ForcedEntry> = extract_entries(&item.meta, tags::FORCED, &registry);
        if weighted.is_empty() && forced.is_empty() {
            println!("  does not deconstruct into anything");
            return Ok(());
        }

        if !weighted.is_empty() {
            let policy = RepeatPolicy::from_metadata(&item.meta);
            let total: f64 = weighted.iter().map(WeightedEntry::mass).sum();
            println!(
                "{} up to {} draws, continue chance {}",
                style("Weighted").cyan(),
                policy.iteration_limit(),
                policy.chance
            );
            let names = item.meta.prefixed(tags::RESULT).map(|(name, _)| name);
            for (entry, tag) in weighted.iter().zip(names) {
                let share = if total > 0.0 {
                    entry.mass() / total * 100.0
                } else {
                    0.0
                };
                println!(
                    "  {:<20} weight {:<8} {:>5.1}%  {}",
                    tag,
                    entry.weight,
                    share,
                    name_of(entry.material)
                );
            }
        }

        if !forced.is_empty() {
            println!("{}", style("Forced").cyan());
            let names = item.meta.prefixed(tags::FORCED).map(|(name, _)| name);
            for (entry, tag) in forced.iter().zip(names) {
                let quantity = match entry.max {
                    Some(max) if max > entry.min => format!("{} to {}", entry.min, max - 1),
                    _ => entry.min.to_string(),
                };
                println!("  {:<20} x {:<8} {}", tag, quantity, name_of(entry.material));
            }
        }

        Ok(())
    }
}
