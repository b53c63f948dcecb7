//! Crate-level tests for elif-mapping
//!
//! Exercise the extractor, association resolver and provider together over a
//! small Northwind-style model, the way the query builders drive them.
