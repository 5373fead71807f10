//! RecommendBriefHandler - Query handler for the persona-based business brief.
//!
//! Team size and timeline are used numerically: raw numbers and numeric strings pass through,
//! bucket labels resolve to their representative values. When no Pivot Point
//! is supplied it is computed from the profile.

use crate::domain::advisory::{BriefRequest, BusinessBrief, BusinessBriefWriter};
use crate::domain::profile::{ArchitectureStyle, RawInput, TeamProfile};
use crate::domain::scoring::lookup_tables as tables;
use crate::domain::scoring::{RiskTier, ScoringEngine};

/// Query for a business brief.
#[derive(Debug, Clone, Default)]
pub struct RecommendBriefQuery {
    pub pivot_point: Option<f64>,
    pub team_size: Option<RawInput>,
    pub experience: Option<RawInput>,
    pub timeline: Option<RawInput>,
    pub scale: Option<RawInput>,
    pub architecture: Option<RawInput>,
    /// Tier claimed by the caller. Never trusted.
    pub risk_level: Option<String>,
}

pub type RecommendBriefResult = BusinessBrief;

pub struct RecommendBriefHandler {
    engine: ScoringEngine,
}

impl RecommendBriefHandler {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    pub fn handle(&self, query: RecommendBriefQuery) -> RecommendBriefResult {
        let profile = TeamProfile::from_raw(
            query.team_size.as_ref(),
            query.experience.as_ref(),
            query.timeline.as_ref(),
            query.scale.as_ref(),
        );
        let architecture = query
            .architecture
            .as_ref()
            .map(ArchitectureStyle::parse_lenient)
            .unwrap_or_default();

        let pivot_point = match query.pivot_point {
            Some(p) if p.is_finite() && p >= 0.0 => p,
            _ => self.engine.pivot_point(&profile, architecture),
        };

        let derived = RiskTier::from_pivot_point(pivot_point);
        if let Some(claimed) = query.risk_level.as_deref() {
            if RiskTier::from_label(claimed) != Some(derived) {
                tracing::warn!(
                    claimed,
                    derived = derived.label(),
                    pivot_point,
                    "risk level disagrees with pivot point, using derived tier"
                );
            }
        }

        let request = BriefRequest {
            pivot_point,
            headcount: headcount(query.team_size.as_ref(), &profile),
            timeline_months: months(query.timeline.as_ref(), &profile),
            architecture,
        };

        BusinessBriefWriter::write(&request)
    }
}

fn headcount(raw: Option<&RawInput>, profile: &TeamProfile) -> f64 {
    raw.and_then(RawInput::as_number)
        .filter(|n| *n > 0.0)
        .unwrap_or_else(|| tables::base_size(profile.team_size))
}

fn months(raw: Option<&RawInput>, profile: &TeamProfile) -> u32 {
    raw.and_then(RawInput::as_number)
        .filter(|m| *m >= 0.0)
        .map(|m| m.round() as u32)
        .unwrap_or_else(|| tables::timeline_months(profile.timeline))
}
