//! Bidirectional lookup tables between the variants of an enumeration and
//! arbitrary values.
//!
//! An [`EnumDescriptor`] lists the variants in declaration order, a
//! [`ValueTable`] says what each variant maps to, and an [`EnumMapping`]
//! answers both `map` (variant to value) and `parse` (value to variant).
//!
//! ```
//! use enum_mapping::{fail, map_enum, map_enum_to_keys, EnumDescriptor, ValueTable};
//!
//! let colors = EnumDescriptor::new()
//!     .variant("Red", "RED")
//!     .variant("Blue", "BLUE")
//!     .variant("Green", "GREEN");
//!
//! let names = map_enum_to_keys(colors.clone());
//! assert_eq!(names.map(&"BLUE").unwrap(), "Blue");
//!
//! let css = map_enum(
//!     colors,
//!     ValueTable::new()
//!         .value("Red", "#f00")
//!         .value("Blue", "#00f")
//!         .entry("Green", fail("green is not supported")),
//! );
//! assert_eq!(css.parse(&"#00f"), Ok(&"BLUE"));
//! assert!(css.map(&"GREEN").is_err());
//! ```

mod bimap;
pub mod builders;
pub mod descriptor;
pub mod error;
pub mod mapping;
pub mod value_table;

pub use builders::{map_enum, map_enum_to_keys, map_enum_to_values, map_enum_with_fn};
pub use descriptor::{EnumDescriptor, Enumeration, Variant};
pub use error::{MappingError, Result};
pub use mapping::EnumMapping;
pub use value_table::{fail, Entry, ValueTable};
