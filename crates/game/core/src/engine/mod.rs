//! Deconstruction resolution.
//!
//! [`DeconstructionEngine::resolve`] runs one request end to end: it checks
//! possession, consumes the item, draws weighted results in the repeat loop,
//! rolls forced results, and reports everything to the party and the message
//! window. It holds only shared references; per-request state lives on the
//! stack of `resolve`.
mod narration;
mod resolution;

pub use narration::format_template;
pub use resolution::{Resolution, ResolveOutcome};

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::DeconConfig;
use crate::env::{CatalogItem, ItemCatalog, ItemId, MessageSink, PartyInventory, RollStream};
use crate::forced::ForcedEntry;
use crate::metadata::{Metadata, extract_entries, tags};
use crate::registry::MaterialRegistry;
use crate::selector::{WeightedEntry, select_one};

/// Repeat-loop parameters read from an item's tags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepeatPolicy {
    /// `DeconMaxRepeats + 1`, or 1 when the tag is missing or malformed.
    ///
    /// A sum of 0 (authored `-1`) also falls back to 1, as a falsy count does
    /// in the host scripts.
    pub max_repeats: f64,
    /// Probability of another draw after a successful one.
    pub chance: f64,
}

impl RepeatPolicy {
    /// Hard ceiling on loop iterations for a single request.
    pub const MAX_ITERATIONS: u32 = 1_000;

    pub fn from_metadata(meta: &Metadata) -> Self {
        let max_repeats = meta
            .get(tags::MAX_REPEATS)
            .map(|value| value.as_number() + 1.0)
            .filter(|n| !n.is_nan() && *n != 0.0)
            .unwrap_or(1.0);

        let chance = meta
            .get(tags::CHANCE_REPEAT)
            .map(|value| value.as_number())
            .filter(|n| !n.is_nan())
            .unwrap_or(0.0);

        Self {
            max_repeats,
            chance,
        }
    }

    /// Upper bound on loop iterations: `max_repeats + 1`, capped at
    /// [`Self::MAX_ITERATIONS`].
    ///
    /// An authored `DeconMaxRepeats` of N therefore allows N + 2 draws.
    pub fn iteration_limit(&self) -> u32 {
        // Saturating cast; a negative limit runs no iterations.
        let limit = (self.max_repeats + 1.0).ceil().max(0.0) as u32;
        limit.min(Self::MAX_ITERATIONS)
    }
}

/// Resolves deconstruction requests against a catalog and material registry.
pub struct DeconstructionEngine<'a> {
    registry: &'a MaterialRegistry,
    catalog: &'a dyn ItemCatalog,
    config: &'a DeconConfig,
}

impl<'a> DeconstructionEngine<'a> {
    pub fn new(
        registry: &'a MaterialRegistry,
        catalog: &'a dyn ItemCatalog,
        config: &'a DeconConfig,
    ) -> Self {
        Self {
            registry,
            catalog,
            config,
        }
    }

    /// Deconstructs one unit of `item`.
    ///
    /// Returns [`ResolveOutcome::NotHeld`] without touching anything when the
    /// id is unknown or the party holds none of it. Otherwise the item is
    /// consumed and the drops are added to `party`, with one narration line
    /// per drop sent to `messages`.
    pub fn resolve<P, M>(
        &self,
        item: ItemId,
        rolls: &mut RollStream<'_>,
        party: &mut P,
        messages: &mut M,
    ) -> ResolveOutcome
    where
        P: PartyInventory + ?Sized,
        M: MessageSink + ?Sized,
    {
        let Some(source) = self.catalog.item(item).filter(|_| !item.is_reserved()) else {
            debug!("item {} is not in the catalog", item);
            return ResolveOutcome::NotHeld;
        };
        if !party.has_item(item) {
            debug!("party does not hold {} ({})", source.name, item);
            return ResolveOutcome::NotHeld;
        }

        party.remove_item(item, 1);

        let mut resolution = Resolution::default();
        let title = format_template(
            &self.config.text_deconstructing,
            &[&source.icon_index.to_string(), &source.name],
        );
        resolution.emit(messages, title);

        let policy = RepeatPolicy::from_metadata(&source.meta);
        let weighted: Vec<WeightedEntry> =
            extract_entries(&source.meta, tags::RESULT, self.registry);

        let mut weighted_drops: BTreeMap<ItemId, u32> = BTreeMap::new();
        if !weighted.is_empty() {
            for _ in 0..policy.iteration_limit() {
                resolution.weighted_draws += 1;
                let Some(material) = select_one(&weighted, rolls.unit()) else {
                    continue;
                };
                *weighted_drops.entry(material).or_insert(0) += 1;

                if rolls.unit() > policy.chance {
                    break;
                }
            }
        }

        for (material, quantity) in weighted_drops {
            self.grant(material, quantity, party, messages, &mut resolution);
        }

        let forced: Vec<ForcedEntry> = extract_entries(&source.meta, tags::FORCED, self.registry);
        for entry in forced {
            let quantity = entry.roll(rolls);
            if quantity == 0 {
                continue;
            }
            let Some(material) = entry.material else {
                warn!("forced drop on {} names an unknown material", source.name);
                continue;
            };
            self.grant(material, quantity, party, messages, &mut resolution);
        }

        debug!(
            "deconstructed {} ({}): {} weighted draws, {} materials",
            source.name,
            item,
            resolution.weighted_draws,
            resolution.drops.len()
        );

        ResolveOutcome::Resolved(resolution)
    }

    fn grant<P, M>(
        &self,
        material: ItemId,
        quantity: u32,
        party: &mut P,
        messages: &mut M,
        resolution: &mut Resolution,
    ) where
        P: PartyInventory + ?Sized,
        M: MessageSink + ?Sized,
    {
        let Some(target) = self.material_item(material) else {
            warn!("material {} is missing from the catalog", material);
            return;
        };

        party.add_item(material, quantity);
        *resolution.drops.entry(material).or_insert(0) += quantity;

        let line = format_template(
            &self.config.text_obtained,
            &[
                &target.icon_index.to_string(),
                &target.name,
                &quantity.to_string(),
            ],
        );
        resolution.emit(messages, line);
    }

    fn material_item(&self, material: ItemId) -> Option<&'a CatalogItem> {
        self.catalog.item(material)
    }
}

#[cfg(test)]
mod tests;
