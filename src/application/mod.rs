//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every ArchitectIQ operation is a read-only query.

pub mod handlers;

pub use handlers::{
    CalculatePivotHandler, CalculatePivotQuery, CalculatePivotResult,
    CompareArchitecturesHandler, CompareArchitecturesQuery, CompareArchitecturesResult,
    ComposeVerdictHandler, ComposeVerdictQuery, ComposeVerdictResult, RecommendBriefHandler,
    RecommendBriefQuery, RecommendBriefResult,
};
