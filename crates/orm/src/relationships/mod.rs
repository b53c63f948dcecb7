//! Relationships Module - association classification and reverse lookup

pub mod registry;
pub mod resolver;

pub use registry::*;
pub use resolver::*;
