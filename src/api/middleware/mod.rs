//! HTTP middleware for request processing and protection.
//!
//! Provides basic authentication and request tracing.

pub mod auth;
pub mod tracing;
