//! Core domain entities.
//!
//! - [`Mapping`] - A persisted alias → URL record
//! - [`NewMapping`] - Input for creating a record; the store assigns the id

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
