//! Ordered, closed sets of `(name, representation)` pairs.

use itertools::Itertools;

/// A Rust enum that can describe its own variants.
///
/// Each variant serves as its own underlying representation:
///
/// ```
/// use enum_mapping::{EnumDescriptor, Enumeration};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Shape {
///     Circle,
///     Square,
/// }
/// impl Enumeration for Shape {
///     const VARIANTS: &'static [(&'static str, Self)] =
///         &[("Circle", Shape::Circle), ("Square", Shape::Square)];
/// }
///
/// let shapes = EnumDescriptor::<Shape>::of();
/// assert_eq!(shapes.name_of(&Shape::Square), Some("Square"));
/// ```
pub trait Enumeration: Sized + 'static {
    const VARIANTS: &'static [(&'static str, Self)];
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Variant<R> {
    pub name: String,
    pub repr: R,
}

/// Declaration-ordered key set of an enumeration.
///
/// Names and representations are expected to be unique; that is the job of
/// whoever declares the enumeration and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct EnumDescriptor<R> {
    variants: Vec<Variant<R>>,
}

impl<R> EnumDescriptor<R> {
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
        }
    }

    pub fn variant(mut self, name: impl Into<String>, repr: R) -> Self {
        self.variants.push(Variant {
            name: name.into(),
            repr,
        });
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant<R>> {
        self.variants.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.iter().map(|v| v.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn repr_of(&self, name: &str) -> Option<&R> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .map(|v| &v.repr)
    }
}

impl<R: PartialEq> EnumDescriptor<R> {
    pub fn name_of(&self, repr: &R) -> Option<&str> {
        self.variants
            .iter()
            .find(|v| &v.repr == repr)
            .map(|v| v.name.as_str())
    }
}

impl<E: Enumeration + Copy> EnumDescriptor<E> {
    pub fn of() -> Self {
        E::VARIANTS.iter().copied().collect()
    }
}

impl<R> Default for EnumDescriptor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Into<String>, R> FromIterator<(N, R)> for EnumDescriptor<R> {
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        Self {
            variants: iter
                .into_iter()
                .map(|(name, repr)| Variant {
                    name: name.into(),
                    repr,
                })
                .collect_vec(),
        }
    }
}

impl<'a, R> IntoIterator for &'a EnumDescriptor<R> {
    type Item = &'a Variant<R>;
    type IntoIter = std::slice::Iter<'a, Variant<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Shape {
        Circle,
        Square,
    }
    impl Enumeration for Shape {
        const VARIANTS: &'static [(&'static str, Self)] =
            &[("Circle", Shape::Circle), ("Square", Shape::Square)];
    }

    #[test]
    fn keeps_declaration_order() {
        let colors = EnumDescriptor::new()
            .variant("Red", "RED")
            .variant("Blue", "BLUE")
            .variant("Green", "GREEN");
        assert_eq!(colors.names().collect_vec(), ["Red", "Blue", "Green"]);
        assert_eq!(colors.repr_of("Blue"), Some(&"BLUE"));
        assert_eq!(colors.name_of(&"GREEN"), Some("Green"));
        assert_eq!(colors.repr_of("Purple"), None);
    }

    #[test]
    fn describes_rust_enums() {
        let shapes = EnumDescriptor::<Shape>::of();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes.repr_of("Circle"), Some(&Shape::Circle));
        assert_eq!(shapes.name_of(&Shape::Square), Some("Square"));
    }

    #[test]
    fn empty_descriptor() {
        let empty = EnumDescriptor::<i64>::default();
        assert!(empty.is_empty());
        assert_eq!(empty.name_of(&0), None);
    }
}
