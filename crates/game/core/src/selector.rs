//! Weighted drop-table rows and single-draw selection.

use crate::env::ItemId;
use crate::metadata::{DropEntry, TagValue};

/// One `<DeconResult Name:Weight>` row.
///
/// `material` is `None` for the `NONE` sentinel and for unresolved names: the
/// row still takes probability mass but yields nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEntry {
    pub material: Option<ItemId>,
    pub weight: f64,
}

impl WeightedEntry {
    pub const fn new(material: Option<ItemId>, weight: f64) -> Self {
        Self { material, weight }
    }

    /// Weight used for selection. NaN, infinite and negative weights count as 0.
    pub fn mass(&self) -> f64 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            0.0
        }
    }
}

impl DropEntry for WeightedEntry {
    fn from_tag(material: Option<ItemId>, value: &TagValue) -> Self {
        Self::new(material, value.as_number())
    }
}

/// Picks one row by weight.
///
/// `draw` is a uniform value in `[0, 1)`. The target `draw * total` is matched
/// against cumulative weights in row order; the first row whose cumulative
/// weight reaches the target wins; rows without mass are never chosen. Returns
/// `None` when the table has no mass or the chosen row yields nothing.
pub fn select_one(entries: &[WeightedEntry], draw: f64) -> Option<ItemId> {
    let total: f64 = entries.iter().map(WeightedEntry::mass).sum();
    if total <= 0.0 {
        return None;
    }

    let target = draw * total;
    let mut cumulative = 0.0;
    for entry in entries {
        let mass = entry.mass();
        if mass == 0.0 {
            continue;
        }
        cumulative += mass;
        if target <= cumulative {
            return entry.material;
        }
    }

    // Rounding left the target above the last cumulative sum.
    entries
        .iter()
        .rev()
        .find(|entry| entry.mass() > 0.0)
        .and_then(|entry| entry.material)
}
