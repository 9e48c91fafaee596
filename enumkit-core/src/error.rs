//! Error types for enumkit operations

use thiserror::Error;

/// Option parsing and validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Errors raised when turning input into enum values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnumError {
    /// A scalar (or absent input) that is not one of the declared values.
    #[error("Value '{value}' is not part of the enum {enum_name}")]
    InvalidValue { enum_name: String, value: String },

    /// A name that is not one of the declared constants.
    #[error("No enum constant '{name}' in enum {enum_name}")]
    UnknownMember { enum_name: String, name: String },
}

impl EnumError {
    pub(crate) fn invalid_value(enum_name: &str, value: impl Into<String>) -> Self {
        EnumError::InvalidValue {
            enum_name: enum_name.to_string(),
            value: value.into(),
        }
    }

    pub(crate) fn unknown_member(enum_name: &str, name: impl Into<String>) -> Self {
        EnumError::UnknownMember {
            enum_name: enum_name.to_string(),
            name: name.into(),
        }
    }

    /// Name of the enum type the error was raised for.
    pub fn enum_name(&self) -> &str {
        match self {
            EnumError::InvalidValue { enum_name, .. }
            | EnumError::UnknownMember { enum_name, .. } => enum_name,
        }
    }
}

/// Result type alias for enumkit operations.
pub type EnumResult<T> = Result<T, EnumError>;

// =============================================================================
// TESTS
// =============================================================================
