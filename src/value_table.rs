//! Per-key values, possibly marked as failures.

use indexmap::IndexMap;

/// What a single key maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<V> {
    Value(V),
    /// Reading this key fails with the carried message.
    Failed(String),
}

impl<V> Entry<V> {
    pub fn as_value(&self) -> Option<&V> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Entry::Failed(_))
    }
}

/// Marks a key as intentionally unsupported.
pub fn fail<V>(message: impl Into<String>) -> Entry<V> {
    Entry::Failed(message.into())
}

/// Entries keyed by variant name, in insertion order.
///
/// Inserting a name twice replaces the earlier entry but keeps its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTable<V> {
    entries: IndexMap<String, Entry<V>>,
}

impl<V> ValueTable<V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn value(self, name: impl Into<String>, value: V) -> Self {
        self.entry(name, Entry::Value(value))
    }

    pub fn failure(self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.entry(name, fail(message))
    }

    pub fn entry(mut self, name: impl Into<String>, entry: Entry<V>) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: Entry<V>) -> Option<Entry<V>> {
        self.entries.insert(name.into(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&Entry<V>> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Entry<V>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for ValueTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Into<String>, V> FromIterator<(N, V)> for ValueTable<V> {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), Entry::Value(value)))
                .collect(),
        }
    }
}
