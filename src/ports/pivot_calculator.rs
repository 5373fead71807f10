//! Pivot Calculator Port - Interface for computing a calculation report.
//!
//! The report can be produced in-process from the scoring engine or fetched
//! from a remote ArchitectIQ deployment. Callers hold a `dyn PivotCalculator`
//! and do not care which one answered.
//!
//! # Example
//!
//! ```ignore
//! let calculator: Arc<dyn PivotCalculator> = Arc::new(LocalCalculator::default());
//! let report = calculator.calculate(&CalculationRequest::default()).await?;
//! assert_eq!(report.risk_level, RiskTier::Critical);
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::profile::{ArchitectureStyle, RawInput, TeamProfile};
use crate::domain::scoring::{Persona, RiskTier, ScoreBreakdown, ScoreResult};

/// Port for Pivot Point calculations.
#[async_trait]
pub trait PivotCalculator: Send + Sync {
    /// Scores one architecture for one profile.
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationReport, CalculatorError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Raw calculation input. Every field is optional and may be a label or a
/// number; unresolved values fall back to neutral defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<RawInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<RawInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<RawInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<RawInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<RawInput>,
}

impl CalculationRequest {
    /// Builds a request from already-resolved values.
    pub fn for_profile(profile: &TeamProfile, architecture: ArchitectureStyle) -> Self {
        Self {
            team_size: Some(profile.team_size.label().into()),
            experience: Some(profile.experience.label().into()),
            timeline: Some(profile.timeline.label().into()),
            scale: Some(profile.scale.label().into()),
            architecture: Some(architecture.label().into()),
        }
    }

    pub fn profile(&self) -> TeamProfile {
        TeamProfile::from_raw(
            self.team_size.as_ref(),
            self.experience.as_ref(),
            self.timeline.as_ref(),
            self.scale.as_ref(),
        )
    }

    pub fn architecture(&self) -> ArchitectureStyle {
        self.architecture
            .as_ref()
            .map(ArchitectureStyle::parse_lenient)
            .unwrap_or_default()
    }
}

/// Coefficients behind a report, rounded like the headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationBreakdown {
    pub experience_multiplier: f64,
    pub timeline_factor: f64,
    pub timeline_pressure: f64,
    pub scale_multiplier: f64,
    pub base_complexity: f64,
    pub workload_suitability: f64,
    pub context_normalization: f64,
}

/// Calculation result as exchanged on the wire. Numerics are rounded to two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationReport {
    pub tcs: f64,
    pub aci: f64,
    pub pivot_point: f64,
    pub risk_level: RiskTier,
    pub persona: Persona,
    pub complexity_tax: f64,
    pub dealbreakers: Vec<String>,
    pub recommendation: String,
    pub calculations: CalculationBreakdown,
}

impl CalculationReport {
    pub fn from_score(score: &ScoreResult, breakdown: &ScoreBreakdown) -> Self {
        Self {
            tcs: round2(score.tcs),
            aci: round2(score.aci),
            pivot_point: round2(score.pivot_point),
            risk_level: score.risk_tier,
            persona: score.persona(),
            complexity_tax: score.complexity_tax_multiplier,
            dealbreakers: score
                .dealbreakers
                .iter()
                .map(|d| d.message().to_string())
                .collect(),
            recommendation: headline(score),
            calculations: CalculationBreakdown {
                experience_multiplier: breakdown.experience_multiplier,
                timeline_factor: breakdown.timeline_factor,
                timeline_pressure: breakdown.timeline_pressure,
                scale_multiplier: breakdown.scale_multiplier,
                base_complexity: breakdown.base_complexity,
                workload_suitability: breakdown.workload_suitability,
                context_normalization: score.cnf,
            },
        }
    }
}

fn headline(score: &ScoreResult) -> String {
    if score.pivot_point < 0.5 {
        format!(
            "Critical: Your Pivot Point of {:.2} indicates mathematical overload. Consider starting with a monolith.",
            score.pivot_point
        )
    } else if score.pivot_point < 1.0 {
        format!(
            "Warning: Complexity tax of {}x will apply. Monitor team velocity closely.",
            score.complexity_tax_multiplier
        )
    } else {
        format!(
            "Good choice: Your team can handle this architecture with Pivot Point of {:.2}.",
            score.pivot_point
        )
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Errors from calculator implementations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// Remote calculator did not answer in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Remote calculator answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// Response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{ComplexityScorer, ScoringEngine};

    #[test]
    fn request_accepts_labels_and_numbers() {
        let json = r#"{"teamSize": 8, "experience": "senior", "timeline": "12", "scale": 50000}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let profile = request.profile();
        assert_eq!(profile.team_size.label(), "6-10");
        assert_eq!(profile.experience.label(), "senior");
        assert_eq!(profile.timeline.label(), "12");
        assert_eq!(profile.scale.label(), "utility");
        assert_eq!(request.architecture(), ArchitectureStyle::Monolith);
    }

    #[test]
    fn empty_request_uses_defaults() {
        let request: CalculationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.profile(), TeamProfile::default());
    }

    #[test]
    fn for_profile_round_trips() {
        let profile = TeamProfile::default();
        let request = CalculationRequest::for_profile(&profile, ArchitectureStyle::Hybrid);
        assert_eq!(request.profile(), profile);
        assert_eq!(request.architecture(), ArchitectureStyle::Hybrid);
    }

    #[test]
    fn report_rounds_and_explains() {
        let profile = TeamProfile::default();
        let score = ScoringEngine::default().evaluate(&profile, ArchitectureStyle::Monolith);
        let breakdown = ComplexityScorer::breakdown(&profile, ArchitectureStyle::Monolith);
        let report = CalculationReport::from_score(&score, &breakdown);

        assert_eq!(report.tcs, 3.0);
        assert_eq!(report.aci, 20.0);
        assert_eq!(report.pivot_point, 0.15);
        assert_eq!(report.risk_level, RiskTier::Critical);
        assert_eq!(report.persona, Persona::Architect);
        assert_eq!(report.complexity_tax, 2.5);
        assert_eq!(
            report.recommendation,
            "Critical: Your Pivot Point of 0.15 indicates mathematical overload. Consider starting with a monolith."
        );
        assert_eq!(report.calculations.context_normalization, 1.0);
    }

    #[test]
    fn report_serializes_camel_case() {
        let profile = TeamProfile::default();
        let score = ScoringEngine::default().evaluate(&profile, ArchitectureStyle::Serverless);
        let breakdown = ComplexityScorer::breakdown(&profile, ArchitectureStyle::Serverless);
        let json = serde_json::to_value(CalculationReport::from_score(&score, &breakdown)).unwrap();

        assert_eq!(json["riskLevel"], "critical");
        assert_eq!(json["persona"], "architect");
        assert!(json["calculations"]["baseComplexity"].is_number());
    }

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(0.154), 0.15);
        assert_eq!(round2(4.39453125), 4.39);
    }
}
