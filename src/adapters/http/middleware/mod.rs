//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `stack` - CORS, timeouts, tracing, request ids and panic recovery

pub mod stack;

pub use stack::{cors_layer, with_middleware, MiddlewareSettings};
