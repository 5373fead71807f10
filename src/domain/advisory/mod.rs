//! Advisory output built on top of the scoring engine.
//!
//! - `recommendation_composer` - Override rules and the final verdict
//! - `migration` - Migration cost plans and phased roadmaps
//! - `pivot_triggers` - Scale breakpoints and re-evaluation triggers
//! - `business_brief` - Persona-based brief for a known Pivot Point

mod business_brief;
mod migration;
mod pivot_triggers;
mod recommendation_composer;

pub use business_brief::{
    BriefRequest, BusinessBrief, BusinessBriefWriter, CostAnalysis, MONTHLY_COST_PER_DEVELOPER,
};
pub use migration::{MigrationPlan, MigrationPlanner, Roadmap, RoadmapPhase, RoadmapStage};
pub use pivot_triggers::{
    PivotTrigger, PivotTriggerGenerator, ScaleBreakpoints, TriggerKind, TARGET_PIVOT_POINT,
};
pub use recommendation_composer::{
    ArchitectureCost, CostComparison, OverrideRule, Recommendation, RecommendationComposer,
    Reinvestment, Verdict, EQUIVALENT_COST_GAP, FEATURE_COST, OVERRIDE_THRESHOLD,
    PLATFORM_THRESHOLD,
};

/// Formats an integer with comma thousands separators.
pub(crate) fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
