//! Domain layer containing the alias mapping model and its contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Mapping record and its creation input
//! - [`repositories`] - Mapping store trait implemented by the infrastructure layer
//! - [`errors`] - Store error taxonomy shared by every layer above the backend
//!
//! The domain layer has no dependency on HTTP or on a particular database
//! driver. Backend-specific failures are translated into [`errors::StoreError`]
//! before they reach this layer.

pub mod entities;
pub mod errors;
pub mod repositories;
