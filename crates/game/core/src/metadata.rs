//! Note-tag metadata and drop-table extraction.
//!
//! Item notes carry author-written tags such as `<DeconResult EmptyBottle:75>`.
//! [`Metadata::parse`] turns a note into an ordered key/value map, and
//! [`extract_entries`] turns the keys under one prefix into typed entries
//! ([`crate::WeightedEntry`], [`crate::ForcedEntry`]) so the engine never sees
//! the raw map.

use indexmap::IndexMap;

use crate::env::ItemId;
use crate::registry::MaterialRegistry;

/// Tag names understood by the deconstructor.
pub mod tags {
    /// `<DeconMaterial:Name>` registers the item as material `Name`.
    pub const MATERIAL: &str = "DeconMaterial";
    /// `<DeconResult Name:Weight>` is one weighted drop-table row.
    pub const RESULT: &str = "DeconResult";
    /// `<DeconForced Name:N>` or `<DeconForced Name:Min to Max>`.
    pub const FORCED: &str = "DeconForced";
    /// `<DeconMaxRepeats:N>`
    pub const MAX_REPEATS: &str = "DeconMaxRepeats";
    /// `<DeconChanceRepeat:0..1>`
    pub const CHANCE_REPEAT: &str = "DeconChanceRepeat";
    /// Material reference meaning "drop nothing".
    pub const NONE: &str = "NONE";
}

/// Value of a single note tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagValue {
    /// `<Key>` with no value.
    Flag,
    /// `<Key:Value>`
    Text(String),
}

impl TagValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag => None,
        }
    }

    /// Numeric reading of the tag.
    ///
    /// Surrounding whitespace is ignored and empty text reads as `0`. Text that
    /// is not a finite number (including `inf` and overflowing exponents)
    /// reads as NaN; a bare flag reads as `1`.
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Flag => 1.0,
            Self::Text(text) => parse_number(text),
        }
    }
}

pub(crate) fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(f64::NAN)
}

/// Ordered note tags of one item.
///
/// Keys keep the position of their first occurrence; a repeated key replaces
/// the earlier value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    tags: IndexMap<String, TagValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every `<Key>` and `<Key:Value>` tag in `note`.
    ///
    /// A key is a run of characters other than `<`, `>` and `:`. Text outside
    /// tags and unterminated tags are ignored.
    pub fn parse(note: &str) -> Self {
        let mut meta = Self::new();
        let mut rest = note;

        while let Some(open) = rest.find('<') {
            let after = &rest[open + 1..];
            let key_len = after.find(['<', '>', ':']).unwrap_or(after.len());
            if key_len == 0 {
                rest = after;
                continue;
            }

            let (key, tail) = after.split_at(key_len);
            let Some(close) = tail.find('>') else {
                break;
            };

            let value = match tail.strip_prefix(':') {
                Some(value) => TagValue::Text(value[..close - 1].to_string()),
                None => TagValue::Flag,
            };
            meta.insert(key, value);
            rest = &tail[close + 1..];
        }

        meta
    }

    pub fn insert(&mut self, key: impl Into<String>, value: TagValue) {
        self.tags.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    /// Textual value of `key`; `None` for missing keys and bare flags.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(TagValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.tags.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Tags written as `"<prefix> <name>"`, yielding `(name, value)`.
    ///
    /// Only the first word after the prefix is taken as the name.
    pub fn prefixed<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a TagValue)> + 'a {
        self.iter().filter_map(move |(key, value)| {
            let rest = key.strip_prefix(prefix)?.strip_prefix(' ')?;
            let name = rest.split(' ').next().unwrap_or_default();
            Some((name, value))
        })
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// A drop-table row built from one prefixed tag.
pub trait DropEntry: Sized {
    fn from_tag(material: Option<ItemId>, value: &TagValue) -> Self;
}

/// Builds one entry per `"<prefix> <name>"` tag, in note order.
///
/// Names are resolved through `registry`. Unknown names and the
/// [`tags::NONE`] sentinel yield entries without a material, which never
/// drop anything.
pub fn extract_entries<E: DropEntry>(
    meta: &Metadata,
    prefix: &str,
    registry: &MaterialRegistry,
) -> Vec<E> {
    meta.prefixed(prefix)
        .map(|(name, value)| {
            let material = if name == tags::NONE {
                None
            } else {
                let material = registry.lookup(name);
                if material.is_none() {
                    tracing::debug!("unresolved material reference '{}' under {}", name, prefix);
                }
                material
            };
            E::from_tag(material, value)
        })
        .collect()
}
