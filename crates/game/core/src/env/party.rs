//! Mutable host collaborators: the party inventory and the message window.

use super::ItemId;

/// Party item storage owned by the host.
///
/// The engine only checks possession and moves quantities; stack limits and
/// bookkeeping are the implementation's concern.
pub trait PartyInventory {
    /// Quantity of `item` currently held.
    fn quantity(&self, item: ItemId) -> u32;

    fn has_item(&self, item: ItemId) -> bool {
        self.quantity(item) > 0
    }

    fn add_item(&mut self, item: ItemId, quantity: u32);

    fn remove_item(&mut self, item: ItemId, quantity: u32);
}

/// Display surface receiving narration lines.
pub trait MessageSink {
    fn add(&mut self, text: String);
}

impl MessageSink for Vec<String> {
    fn add(&mut self, text: String) {
        self.push(text);
    }
}
