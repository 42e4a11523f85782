//! Mappings derived from the descriptor alone.

use std::{fmt::Debug, hash::Hash};

use indexmap::IndexMap;

use crate::{descriptor::EnumDescriptor, mapping::EnumMapping, value_table::ValueTable};

/// Maps each variant to the value given for its name in `table`.
pub fn map_enum<R, V>(descriptor: EnumDescriptor<R>, table: ValueTable<V>) -> EnumMapping<R, V>
where
    R: Eq + Hash + Clone + Debug,
    V: Eq + Hash + Clone + Debug,
{
    EnumMapping::new(descriptor, table)
}

/// Maps each variant to its own name, i.e. `map(Red) == "Red"` and `parse("Red") == Red`.
pub fn map_enum_to_keys<R>(descriptor: EnumDescriptor<R>) -> EnumMapping<R, String>
where
    R: Eq + Hash + Clone + Debug,
{
    let table = descriptor
        .names()
        .map(|name| (name, name.to_owned()))
        .collect();
    EnumMapping::new(descriptor, table)
}

/// Maps each variant to its underlying representation converted into `V`,
/// i.e. `map(Red) == "RED"` for `Red = "RED"`.
pub fn map_enum_to_values<R, V>(descriptor: EnumDescriptor<R>) -> EnumMapping<R, V>
where
    R: Eq + Hash + Clone + Debug + Into<V>,
    V: Eq + Hash + Clone + Debug,
{
    let table = descriptor
        .iter()
        .map(|variant| (variant.name.as_str(), variant.repr.clone().into()))
        .collect();
    EnumMapping::new(descriptor, table)
}

/// Applies `f` to every representation, keyed by variant name in declaration order.
///
/// One-directional: the result has no reverse lookup.
pub fn map_enum_with_fn<R, V>(
    descriptor: &EnumDescriptor<R>,
    f: impl Fn(&R) -> V,
) -> IndexMap<String, V> {
    descriptor
        .iter()
        .map(|variant| (variant.name.clone(), f(&variant.repr)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> EnumDescriptor<&'static str> {
        EnumDescriptor::new()
            .variant("Red", "RED")
            .variant("Blue", "BLUE")
            .variant("Green", "GREEN")
    }

    #[test]
    fn keys_map_to_names() {
        let mapping = map_enum_to_keys(colors());
        assert_eq!(mapping.map(&"RED").map(String::as_str), Ok("Red"));
        assert_eq!(mapping.parse("Green"), Ok(&"GREEN"));
    }

    #[test]
    fn values_map_to_representations() {
        let mapping: EnumMapping<_, String> = map_enum_to_values(colors());
        assert_eq!(mapping.map(&"RED").map(String::as_str), Ok("RED"));
        assert_eq!(mapping.parse("BLUE"), Ok(&"BLUE"));
    }

    #[test]
    fn numeric_values_widen() {
        let sizes = EnumDescriptor::new().variant("Small", 8u8).variant("Large", 32u8);
        let mapping: EnumMapping<u8, u32> = map_enum_to_values(sizes);
        assert_eq!(mapping.map(&32), Ok(&32u32));
        assert_eq!(mapping.parse(&8), Ok(&8u8));
    }

    #[test]
    fn transform_keeps_declaration_order() {
        let sizes = EnumDescriptor::new()
            .variant("Small", 8)
            .variant("Medium", 16)
            .variant("Large", 32);
        let rem = map_enum_with_fn(&sizes, |px| format!("{}rem", *px as f32 / 16.0));
        assert_eq!(
            rem.into_iter().collect::<Vec<_>>(),
            [
                ("Small".to_owned(), "0.5rem".to_owned()),
                ("Medium".to_owned(), "1rem".to_owned()),
                ("Large".to_owned(), "2rem".to_owned()),
            ]
        );
    }
}
