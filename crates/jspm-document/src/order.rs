//! Key-order schema for newly inserted document keys

/// Preferred order of keys within a document, nested per object.
///
/// Only affects keys that do not exist yet; existing keys never move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOrder {
    entries: Vec<(String, KeyOrder)>,
}

impl KeyOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key with no ordering for its children.
    pub fn key(self, name: impl Into<String>) -> Self {
        self.nested(name, KeyOrder::new())
    }

    /// Append a key whose object members follow `children`.
    pub fn nested(mut self, name: impl Into<String>, children: KeyOrder) -> Self {
        self.entries.push((name.into(), children));
        self
    }

    /// Rank of `key` in this level, if the schema knows it.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == key)
    }

    /// Ordering for the members of `key`.
    pub fn child(&self, key: &str) -> Option<&KeyOrder> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, children)| children)
    }
}
