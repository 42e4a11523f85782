//! The bidirectional enum <-> value mapping.

use std::{borrow::Borrow, fmt::Debug, hash::Hash};

use crate::{
    bimap::BiMap,
    descriptor::EnumDescriptor,
    error::{MappingError, Result},
    value_table::{Entry, ValueTable},
};

/// Bidirectional mapping between the variants of an enumeration and arbitrary values.
///
/// `R` is the variant's underlying representation and `V` the mapped value. Both
/// indexes are built once in [`EnumMapping::new`] and never change afterwards.
///
/// Mapped values are not required to be unique. When several variants share a
/// value, [`map`](EnumMapping::map) works for all of them but
/// [`parse`](EnumMapping::parse) returns the variant declared first.
///
/// ```
/// use enum_mapping::{EnumDescriptor, EnumMapping, ValueTable};
///
/// let colors = EnumDescriptor::new()
///     .variant("Red", "RED")
///     .variant("Blue", "BLUE");
/// let mapping = EnumMapping::new(
///     colors,
///     ValueTable::new().value("Red", 1).value("Blue", 10),
/// );
/// assert_eq!(mapping.map(&"RED"), Ok(&1));
/// assert_eq!(mapping.parse(&10), Ok(&"BLUE"));
/// ```
#[derive(Debug, Clone)]
pub struct EnumMapping<R: Eq + Hash, V: Eq + Hash> {
    descriptor: EnumDescriptor<R>,
    table: ValueTable<V>,
    index: BiMap<R, V>,
}

impl<R, V> EnumMapping<R, V>
where
    R: Eq + Hash + Clone + Debug,
    V: Eq + Hash + Clone + Debug,
{
    /// Indexes every variant of `descriptor` in declaration order.
    ///
    /// Never fails: a variant missing from `table` is indexed as a failure and
    /// only reported when it is mapped.
    pub fn new(descriptor: EnumDescriptor<R>, table: ValueTable<V>) -> Self {
        log::trace!("Indexing {} enum variants", descriptor.len());
        let mut index = BiMap::with_capacity(descriptor.len());
        for variant in &descriptor {
            let entry = match table.get(&variant.name) {
                Some(entry) => entry.clone(),
                None => Entry::Failed(format!("No value mapped for key {}", variant.name)),
            };
            if !index.insert_first(variant.repr.clone(), entry) {
                log::debug!(
                    "{} shares its mapped value with an earlier variant, parse will not return it",
                    variant.name
                );
            }
        }
        Self {
            descriptor,
            table,
            index,
        }
    }
}

impl<R: Eq + Hash, V: Eq + Hash> EnumMapping<R, V> {
    /// Forward lookup: representation to mapped value.
    ///
    /// Fails with [`MappingError::NotFound`] for a representation of some other
    /// enumeration, and with the stored message for a variant mapped to a failure.
    pub fn map<Q>(&self, repr: &Q) -> Result<&V>
    where
        R: Borrow<Q>,
        Q: Eq + Hash + Debug + ?Sized,
    {
        match self.index.get(repr) {
            Some(Entry::Value(value)) => Ok(value),
            Some(Entry::Failed(message)) => Err(MappingError::Failed(message.clone())),
            None => Err(MappingError::not_found(&repr)),
        }
    }

    /// Forward lookup by variant name.
    pub fn map_name(&self, name: &str) -> Result<&V>
    where
        R: Debug,
    {
        match self.descriptor.repr_of(name) {
            Some(repr) => self.map(repr),
            None => Err(MappingError::not_found(&name)),
        }
    }

    /// Reverse lookup: mapped value to representation.
    pub fn parse<Q>(&self, value: &Q) -> Result<&R>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + Debug + ?Sized,
    {
        self.index
            .get_by_value(value)
            .ok_or_else(|| MappingError::invalid_value(&value))
    }

    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_value(value)
    }

    /// [`map`](Self::map) as a free-standing function borrowing this mapping.
    pub fn mapper<'a>(&'a self) -> impl Fn(&R) -> Result<&'a V> + 'a
    where
        R: Debug,
    {
        move |repr: &R| self.map(repr)
    }

    /// [`parse`](Self::parse) as a free-standing function borrowing this mapping.
    pub fn parser<'a>(&'a self) -> impl Fn(&V) -> Result<&'a R> + 'a
    where
        V: Debug,
    {
        move |value: &V| self.parse(value)
    }

    pub fn descriptor(&self) -> &EnumDescriptor<R> {
        &self.descriptor
    }

    pub fn table(&self) -> &ValueTable<V> {
        &self.table
    }

    /// Variants with their forward entries, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R, &Entry<V>)> + '_ {
        self.descriptor.iter().filter_map(|variant| {
            self.index
                .get(&variant.repr)
                .map(|entry| (variant.name.as_str(), &variant.repr, entry))
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.len() == 0
    }
}
