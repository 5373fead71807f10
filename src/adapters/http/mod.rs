//! HTTP adapters - REST API implementations.
//!
//! The scoring adapter exposes the engine; the middleware stack wraps it.

pub mod middleware;
pub mod scoring;

// Re-export key types for convenience
pub use middleware::{with_middleware, MiddlewareSettings};
pub use scoring::{api_router, ScoringAppState};

use axum::Router;

/// Builds the complete application: scoring routes at the root and under
/// `/api`, wrapped in the middleware stack.
pub fn build_app(state: ScoringAppState, settings: &MiddlewareSettings) -> Router {
    with_middleware(api_router(state), settings)
}
