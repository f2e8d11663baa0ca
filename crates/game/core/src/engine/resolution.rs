use std::collections::BTreeMap;

use crate::env::{ItemId, MessageSink};

/// Outcome of a single deconstruction request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The party did not hold the item; nothing happened.
    NotHeld,
    /// The item was consumed.
    Resolved(Resolution),
}

impl ResolveOutcome {
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            Self::Resolved(resolution) => Some(resolution),
            Self::NotHeld => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Everything a consumed item produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Merged weighted and forced drops.
    pub drops: BTreeMap<ItemId, u32>,
    /// Lines sent to the message window, in order.
    pub narration: Vec<String>,
    /// Iterations of the repeat loop, including draws that yielded nothing.
    pub weighted_draws: u32,
}

impl Resolution {
    pub fn quantity(&self, item: ItemId) -> u32 {
        self.drops.get(&item).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub(super) fn emit<M: MessageSink + ?Sized>(&mut self, messages: &mut M, line: String) {
        messages.add(line.clone());
        self.narration.push(line);
    }
}
