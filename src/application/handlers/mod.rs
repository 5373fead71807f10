//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod scoring;

pub use scoring::{
    CalculatePivotHandler, CalculatePivotQuery, CalculatePivotResult,
    CompareArchitecturesHandler, CompareArchitecturesQuery, CompareArchitecturesResult,
    ComposeVerdictHandler, ComposeVerdictQuery, ComposeVerdictResult, RecommendBriefHandler,
    RecommendBriefQuery, RecommendBriefResult,
};
