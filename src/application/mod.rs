//! Application layer services implementing business logic.
//!
//! Services consume the repository traits of the domain layer and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::alias_service::AliasService`] - Alias allocation, persistence and resolution

pub mod services;
