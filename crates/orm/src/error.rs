//! Error types for the mapping layer
//!
//! Every error raised here describes static metadata that is wrong or used
//! out of contract. None of them are retryable: the declarative metadata of a
//! type cannot change between attempts.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

/// Error types for metadata resolution and association lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A column-mapped property has no setter, so rows cannot be hydrated into it
    #[error("Cannot retrieve type {type_name} from SQL - field {property} has no setter")]
    NotWritableMapping { type_name: String, property: String },

    /// `find_reverse` was handed an association that was never classified
    #[error("Association '{name}' must come from a previous classify call")]
    UnregisteredAssociation { name: String },

    /// The introspector has no description for a type reached through an association
    #[error("No type information registered for '{type_name}'")]
    UnknownType { type_name: String },

    /// Configuration loading or validation failed
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MappingError {
    pub fn not_writable(type_name: impl Into<String>, property: impl Into<String>) -> Self {
        MappingError::NotWritableMapping {
            type_name: type_name.into(),
            property: property.into(),
        }
    }

    /// True for errors caused by a caller breaking the resolver's contract,
    /// as opposed to bad metadata on a type.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, MappingError::UnregisteredAssociation { .. })
    }
}
