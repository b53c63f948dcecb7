//! Introspection - how mapped types describe their declarative metadata
//!
//! - `attributes`: Table, Column, Association and AutoGenId annotation shapes
//! - `types`: type, property, field and constructor descriptions
//! - `catalog`: the `Introspector` capability and its `TypeCatalog` store
//! - `lookup`: attribute queries over descriptions

pub mod attributes;
pub mod types;
pub mod catalog;
pub mod lookup;

pub use attributes::*;
pub use types::*;
pub use catalog::*;
pub use lookup::*;
