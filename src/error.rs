//! Errors raised by forward and reverse lookups.

use thiserror::Error;

/// Failure of a single `map` or `parse` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The representation does not belong to the mapping's enumeration.
    #[error("No mapping found for {representation}")]
    NotFound { representation: String },

    /// The key was mapped to an error sentinel. Displays the sentinel's message as is.
    #[error("{0}")]
    Failed(String),

    /// No key maps to the given value.
    #[error("Invalid mapped value {value}")]
    InvalidValue { value: String },
}

impl MappingError {
    pub(crate) fn not_found(representation: &impl std::fmt::Debug) -> Self {
        Self::NotFound {
            representation: format!("{representation:?}"),
        }
    }

    pub(crate) fn invalid_value(value: &impl std::fmt::Debug) -> Self {
        Self::InvalidValue {
            value: format!("{value:?}"),
        }
    }
}

/// A convenience `Result` type alias using the crate's `MappingError` type.
pub type Result<T> = std::result::Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_displays_message_verbatim() {
        assert_eq!(MappingError::Failed("not green!".into()).to_string(), "not green!");
    }

    #[test]
    fn diagnostics_carry_offending_input() {
        assert_eq!(
            MappingError::invalid_value(&"purple").to_string(),
            "Invalid mapped value \"purple\""
        );
        assert_eq!(MappingError::not_found(&7).to_string(), "No mapping found for 7");
    }
}
