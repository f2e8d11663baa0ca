//! Guaranteed drops with fixed or ranged quantities.

use crate::env::{ItemId, RollStream};
use crate::metadata::{DropEntry, TagValue, parse_number};

/// Separator between the bounds of a ranged forced drop.
pub const RANGE_SEPARATOR: &str = " to ";

/// One `<DeconForced Name:N>` or `<DeconForced Name:Min to Max>` row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForcedEntry {
    pub material: Option<ItemId>,
    pub min: u32,
    /// Exclusive upper bound; `None` makes the quantity exactly `min`.
    pub max: Option<u32>,
}

impl ForcedEntry {
    pub const fn fixed(material: Option<ItemId>, quantity: u32) -> Self {
        Self {
            material,
            min: quantity,
            max: None,
        }
    }

    pub const fn ranged(material: Option<ItemId>, min: u32, max: u32) -> Self {
        Self {
            material,
            min,
            max: Some(max),
        }
    }

    /// Parses `"N"` or `"Min to Max"`.
    ///
    /// A missing or non-numeric lower bound reads as 0; a non-numeric upper
    /// bound is dropped. Fractions are truncated and negatives clamp to 0.
    pub fn parse(material: Option<ItemId>, value: &str) -> Self {
        let mut parts = value.split(RANGE_SEPARATOR);
        let min = parts.next().and_then(parse_bound).unwrap_or(0);
        let max = parts.next().and_then(parse_bound);
        Self { material, min, max }
    }

    pub fn is_ranged(&self) -> bool {
        self.max.is_some()
    }

    /// Quantity for a uniform `draw` in `[0, 1)`.
    ///
    /// Ranged entries yield `min + floor(draw * (max - min))`, so `max` itself
    /// is never produced. An empty or inverted range yields `min`.
    pub fn quantity_at(&self, draw: f64) -> u32 {
        match self.max {
            Some(max) if max > self.min => {
                let span = f64::from(max - self.min);
                let offset = (draw * span).floor() as u32;
                self.min + offset.min(max - self.min - 1)
            }
            _ => self.min,
        }
    }

    /// Realized quantity for this resolution. Only ranged entries consume a draw.
    pub fn roll(&self, rolls: &mut RollStream<'_>) -> u32 {
        if self.is_ranged() {
            self.quantity_at(rolls.unit())
        } else {
            self.min
        }
    }
}

impl DropEntry for ForcedEntry {
    fn from_tag(material: Option<ItemId>, value: &TagValue) -> Self {
        match value {
            TagValue::Text(text) => Self::parse(material, text),
            TagValue::Flag => Self::fixed(material, 1),
        }
    }
}

fn parse_bound(text: &str) -> Option<u32> {
    let value = parse_number(text);
    if value.is_nan() {
        return None;
    }
    // Saturating cast: negatives become 0, oversized values u32::MAX.
    Some(value.trunc() as u32)
}
