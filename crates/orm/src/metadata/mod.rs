//! Entity metadata - resolving a type into its table/column mapping

pub mod projection;
pub mod extractor;
pub mod cache;

pub use projection::*;
pub use extractor::*;
pub use cache::*;
