//! HTTP routes for scoring endpoints.

use axum::routing::{post, MethodRouter};
use axum::Router;

use super::handlers::{
    calculate, compare, method_not_allowed, preflight, recommend, verdict, ScoringAppState,
};

/// POST handler plus the OPTIONS and 405 behavior every scoring route shares.
fn scoring_method<H, T>(handler: H) -> MethodRouter<ScoringAppState>
where
    H: axum::handler::Handler<T, ScoringAppState>,
    T: 'static,
{
    post(handler).options(preflight).fallback(method_not_allowed)
}

/// Creates the scoring router with all routes.
pub fn scoring_routes(state: ScoringAppState) -> Router {
    Router::new()
        // POST /calculate
        .route("/calculate", scoring_method(calculate))
        // POST /recommend
        .route("/recommend", scoring_method(recommend))
        // POST /compare
        .route("/compare", scoring_method(compare))
        // POST /verdict
        .route("/verdict", scoring_method(verdict))
        .with_state(state)
}

/// Scoring routes served both at the root and under `/api`.
pub fn api_router(state: ScoringAppState) -> Router {
    scoring_routes(state.clone()).nest("/api", scoring_routes(state))
}
