use std::collections::BTreeMap;

use decon_core::{ItemId, PartyInventory};

/// Party holdings with a per-item stack limit.
///
/// Gains clamp to the limit and losses never go below zero; items that reach
/// zero are removed from the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartyState {
    items: BTreeMap<ItemId, u32>,
    max_stack: u32,
}

impl PartyState {
    pub fn new(max_stack: u32) -> Self {
        Self {
            items: BTreeMap::new(),
            max_stack,
        }
    }

    pub fn max_stack(&self) -> u32 {
        self.max_stack
    }

    /// Sets the held quantity directly, clamped to the stack limit.
    pub fn set(&mut self, item: ItemId, quantity: u32) {
        let quantity = quantity.min(self.max_stack);
        if quantity == 0 {
            self.items.remove(&item);
        } else {
            self.items.insert(item, quantity);
        }
    }

    /// Held `(item, quantity)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.items.iter().map(|(&item, &quantity)| (item, quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PartyInventory for PartyState {
    fn quantity(&self, item: ItemId) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    fn add_item(&mut self, item: ItemId, quantity: u32) {
        let held = self.quantity(item);
        self.set(item, held.saturating_add(quantity));
    }

    fn remove_item(&mut self, item: ItemId, quantity: u32) {
        let held = self.quantity(item);
        self.set(item, held.saturating_sub(quantity));
    }
}
