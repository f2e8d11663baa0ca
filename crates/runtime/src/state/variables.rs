use std::collections::BTreeMap;

/// Numbered game variables used by event commands.
///
/// Unset variables read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<u32, i64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, id: u32) -> i64 {
        self.values.get(&id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: u32, value: i64) {
        self.values.insert(id, value);
    }
}
