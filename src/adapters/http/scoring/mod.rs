//! Scoring HTTP adapter module.
//!
//! Provides REST API endpoints for Pivot Point calculation, business briefs,
//! architecture comparison and verdicts.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, ProfileRequest, RecommendRequest};
pub use handlers::{ScoringApiError, ScoringAppState};
pub use routes::{api_router, scoring_routes};
