//! Scoring query handlers.
//!
//! Read-only handlers over the scoring engine and advisory services.

mod calculate_pivot;
mod compare_architectures;
mod compose_verdict;
mod recommend_brief;

pub use calculate_pivot::{CalculatePivotHandler, CalculatePivotQuery, CalculatePivotResult};
pub use compare_architectures::{
    CompareArchitecturesHandler, CompareArchitecturesQuery, CompareArchitecturesResult,
};
pub use compose_verdict::{ComposeVerdictHandler, ComposeVerdictQuery, ComposeVerdictResult};
pub use recommend_brief::{RecommendBriefHandler, RecommendBriefQuery, RecommendBriefResult};
