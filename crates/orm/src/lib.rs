//! # elif-mapping: ORM metadata layer for elif.rs
//!
//! Resolves how declared entity types map to tables and columns, pairs
//! foreign-key associations with their reverse side, and renders
//! dialect-specific SQL fragments through pluggable providers.
//!
//! - `introspect`: type descriptions and the `Introspector` capability
//! - `metadata`: `ProjectionData` descriptors and their cache
//! - `relationships`: association classification and reverse lookup
//! - `backends`: SQL dialects and providers (PostgreSQL)

pub mod introspect;
pub mod metadata;
pub mod relationships;
pub mod backends;
pub mod sql;
pub mod config;
pub mod context;
pub mod error;

#[cfg(test)]
mod tests;

// Re-export core traits and types
pub use introspect::*;
pub use metadata::*;
pub use relationships::*;
pub use backends::{PostgresSqlProvider, SqlDialect, SqlProvider};
pub use config::{ConfigError, MappingConfig};
pub use context::MappingContext;
pub use error::*;
