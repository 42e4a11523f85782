use std::{
    borrow::Borrow,
    collections::{hash_map, HashMap},
};

use crate::value_table::Entry;

/// Forward and reverse indexes over representations and their mapped values.
///
/// The reverse side only ever holds the first representation inserted for a value.
#[derive(Debug, Clone)]
pub(crate) struct BiMap<R: Eq + std::hash::Hash, V: Eq + std::hash::Hash> {
    forward: HashMap<R, Entry<V>>,
    reverse: HashMap<V, R>,
}
impl<R: Eq + std::hash::Hash, V: Eq + std::hash::Hash> BiMap<R, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(capacity),
            reverse: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn get<Q>(&self, repr: &Q) -> Option<&Entry<V>>
    where
        R: Borrow<Q>,
        Q: Eq + std::hash::Hash + ?Sized,
    {
        self.forward.get(repr)
    }

    pub(crate) fn get_by_value<Q>(&self, value: &Q) -> Option<&R>
    where
        V: Borrow<Q>,
        Q: Eq + std::hash::Hash + ?Sized,
    {
        self.reverse.get(value)
    }

    pub(crate) fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + std::hash::Hash + ?Sized,
    {
        self.reverse.contains_key(value)
    }

    pub(crate) fn len(&self) -> usize {
        self.forward.len()
    }
}
impl<R: Eq + std::hash::Hash + Clone, V: Eq + std::hash::Hash + Clone> BiMap<R, V> {
    /// Returns `false` when the value already points at an earlier representation.
    pub(crate) fn insert_first(&mut self, repr: R, entry: Entry<V>) -> bool {
        let mut claimed = true;
        if let Entry::Value(value) = &entry {
            match self.reverse.entry(value.clone()) {
                hash_map::Entry::Occupied(_) => claimed = false,
                hash_map::Entry::Vacant(slot) => {
                    slot.insert(repr.clone());
                }
            }
        }
        self.forward.insert(repr, entry);
        claimed
    }
}

#[test]
fn first_value_wins() {
    let mut bimap = BiMap::with_capacity(3);
    assert!(bimap.insert_first("RED", Entry::Value(1)));
    assert!(!bimap.insert_first("CRIMSON", Entry::Value(1)));
    assert!(bimap.insert_first("GREEN", Entry::<i32>::Failed("nope".into())));
    assert_eq!(bimap.get_by_value(&1), Some(&"RED"));
    assert_eq!(bimap.get(&"CRIMSON"), Some(&Entry::Value(1)));
    assert_eq!(bimap.get(&"GREEN"), Some(&Entry::Failed("nope".into())));
    assert!(!bimap.contains_value(&2));
    assert_eq!(bimap.len(), 3);
}
