//! Scoring engine facade.
//!
//! Wires the scorer, evaluator, detector and ranker together for one profile.
//! The engine is `Copy` and holds only options, so it can be shared freely
//! between concurrent requests.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{ArchitectureStyle, TeamProfile};

use super::architecture_ranker::{ArchitectureRanker, RankingResult};
use super::complexity_scorer::ComplexityScorer;
use super::dealbreaker_detector::{Dealbreaker, DealbreakerDetector};
use super::pivot_evaluator::{Persona, PivotPointEvaluator, RiskTier};

/// Evaluation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Multiply every Pivot Point by the scale's Context Normalization Factor.
    pub context_normalization: bool,
}

/// Fitness of one architecture for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub architecture: ArchitectureStyle,
    pub tcs: f64,
    pub aci: f64,
    pub raw_pivot_point: f64,
    pub cnf: f64,
    pub pivot_point: f64,
    pub risk_tier: RiskTier,
    pub complexity_tax_multiplier: f64,
    pub dealbreakers: Vec<Dealbreaker>,
}

impl ScoreResult {
    pub fn persona(&self) -> Persona {
        self.risk_tier.persona()
    }

    pub fn has_dealbreakers(&self) -> bool {
        !self.dealbreakers.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    options: EngineOptions,
}

impl ScoringEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// CNF in effect for a profile (1.0 when normalization is off).
    pub fn cnf(&self, profile: &TeamProfile) -> f64 {
        if self.options.context_normalization {
            ComplexityScorer::cnf(profile)
        } else {
            1.0
        }
    }

    /// Scores a single architecture.
    pub fn evaluate(&self, profile: &TeamProfile, architecture: ArchitectureStyle) -> ScoreResult {
        let tcs = ComplexityScorer::tcs(profile);
        self.evaluate_with_tcs(profile, architecture, tcs, self.cnf(profile))
    }

    /// Scores all four architectures in canonical order. TCS is computed once.
    pub fn evaluate_all(&self, profile: &TeamProfile) -> Vec<ScoreResult> {
        let tcs = ComplexityScorer::tcs(profile);
        let cnf = self.cnf(profile);

        ArchitectureStyle::ALL
            .into_iter()
            .map(|arch| self.evaluate_with_tcs(profile, arch, tcs, cnf))
            .collect()
    }

    /// Pivot Point of one architecture.
    pub fn pivot_point(&self, profile: &TeamProfile, architecture: ArchitectureStyle) -> f64 {
        let tcs = ComplexityScorer::tcs(profile);
        let aci = ComplexityScorer::aci(profile, architecture);
        PivotPointEvaluator::evaluate(tcs, aci, self.cnf(profile)).pivot_point
    }

    /// Scores and ranks all architectures.
    pub fn rank(&self, profile: &TeamProfile) -> RankingResult {
        ArchitectureRanker::rank(profile, self.evaluate_all(profile))
    }

    fn evaluate_with_tcs(
        &self,
        profile: &TeamProfile,
        architecture: ArchitectureStyle,
        tcs: f64,
        cnf: f64,
    ) -> ScoreResult {
        let aci = ComplexityScorer::aci(profile, architecture);
        let evaluation = PivotPointEvaluator::evaluate(tcs, aci, cnf);

        ScoreResult {
            architecture,
            tcs,
            aci,
            raw_pivot_point: evaluation.raw_pivot_point,
            cnf: evaluation.cnf,
            pivot_point: evaluation.pivot_point,
            risk_tier: evaluation.risk_tier,
            complexity_tax_multiplier: evaluation.complexity_tax_multiplier,
            dealbreakers: DealbreakerDetector::detect(profile, architecture),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{ExperienceLevel, ScaleCategory, TeamSizeBucket, TimelineBucket};
    use crate::domain::scoring::Viability;

    fn saas_team() -> TeamProfile {
        TeamProfile::new(
            TeamSizeBucket::Small,
            ExperienceLevel::Mixed,
            TimelineBucket::SixMonths,
            ScaleCategory::Saas,
        )
    }

    fn enterprise_utility_team() -> TeamProfile {
        TeamProfile::new(
            TeamSizeBucket::Enterprise,
            ExperienceLevel::Expert,
            TimelineBucket::TwelveMonths,
            ScaleCategory::Utility,
        )
    }

    #[test]
    fn monolith_for_small_mixed_team_is_critical() {
        let result = ScoringEngine::default().evaluate(&saas_team(), ArchitectureStyle::Monolith);
        assert!((result.tcs - 3.0).abs() < 1e-9);
        assert!((result.aci - 20.0).abs() < 1e-9);
        assert!((result.pivot_point - 0.15).abs() < 1e-9);
        assert_eq!(result.risk_tier, RiskTier::Critical);
        assert_eq!(result.complexity_tax_multiplier, 2.5);
    }

    #[test]
    fn serverless_for_small_mixed_team_is_critical() {
        let result =
            ScoringEngine::default().evaluate(&saas_team(), ArchitectureStyle::Serverless);
        assert!((result.aci - 60.0).abs() < 1e-9);
        assert!((result.pivot_point - 0.05).abs() < 1e-9);
        assert_eq!(result.risk_tier, RiskTier::Critical);
    }

    #[test]
    fn monolith_for_enterprise_experts_is_excellent() {
        let result = ScoringEngine::default()
            .evaluate(&enterprise_utility_team(), ArchitectureStyle::Monolith);
        assert!((result.tcs - 45.0).abs() < 1e-9);
        assert!((result.aci - 10.24).abs() < 1e-9);
        assert!((result.pivot_point - 4.39453125).abs() < 1e-6);
        assert_eq!(result.risk_tier, RiskTier::Excellent);
        assert_eq!(result.complexity_tax_multiplier, 1.0);
        assert!(!result.has_dealbreakers());
        assert_eq!(result.persona(), Persona::Cto);
    }

    #[test]
    fn evaluate_all_uses_canonical_order_and_shared_tcs() {
        let results = ScoringEngine::default().evaluate_all(&saas_team());
        let archs: Vec<_> = results.iter().map(|r| r.architecture).collect();
        assert_eq!(archs, ArchitectureStyle::ALL.to_vec());
        assert!(results.iter().all(|r| r.tcs == results[0].tcs));
    }

    #[test]
    fn context_normalization_rescales_uniformly() {
        let plain = ScoringEngine::default().evaluate_all(&saas_team());
        let normalized = ScoringEngine::new(EngineOptions {
            context_normalization: true,
        })
        .evaluate_all(&saas_team());

        for (p, n) in plain.iter().zip(normalized.iter()) {
            assert_eq!(n.cnf, 5.0);
            assert!((n.pivot_point - p.pivot_point * 5.0).abs() < 1e-9);
            assert_eq!(n.raw_pivot_point, p.raw_pivot_point);
        }
    }

    #[test]
    fn microservices_dealbreakers_disqualify_in_ranking() {
        let profile = TeamProfile::new(
            TeamSizeBucket::Pair,
            ExperienceLevel::Junior,
            TimelineBucket::OneMonth,
            ScaleCategory::Saas,
        );
        let ranking = ScoringEngine::default().rank(&profile);
        let micro = ranking.find(ArchitectureStyle::Microservices).unwrap();
        assert_eq!(micro.viability, Viability::Disqualified);
        assert_eq!(micro.score.dealbreakers.len(), 3);
    }

    #[test]
    fn enterprise_ranking_has_a_winner() {
        let ranking = ScoringEngine::default().rank(&enterprise_utility_team());
        assert!(!ranking.viable.is_empty());
        assert!(!ranking.winners.is_empty());
        assert_eq!(ranking.top().map(|r| r.architecture), Some(ArchitectureStyle::Monolith));
    }
}
