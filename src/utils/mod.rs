//! Utility functions shared across layers.
//!
//! - [`alias_generator`] - Alias generation and validation
//! - [`url_normalizer`] - Canonical form of target URLs

pub mod alias_generator;
pub mod url_normalizer;
