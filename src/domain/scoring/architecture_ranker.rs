//! Architecture Ranker - viability gate, projections, referee scoring.
//!
//! # Algorithm
//!
//! 1. Gate: dealbreakers or Pivot Point < 0.5 disqualify; ≥ 1.0 is viable;
//!    anything in between pays a complexity tax.
//! 2. Project cost and timeline per architecture.
//! 3. Score the viable set:
//!    `pivot × 0.5 + (fastest / timeline) × 0.3 + (cheapest / cost) × 0.2`.
//! 4. Every viable architecture within 10% of the top score wins.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{ArchitectureStyle, TeamProfile};

use super::engine::ScoreResult;
use super::lookup_tables as tables;
use super::pivot_evaluator::{PivotPointEvaluator, DISQUALIFY_THRESHOLD, VIABLE_THRESHOLD};

/// Relative distance from the top referee score that still counts as a win.
pub const TIE_TOLERANCE: f64 = 0.10;

const PIVOT_WEIGHT: f64 = 0.5;
const TIMELINE_WEIGHT: f64 = 0.3;
const COST_WEIGHT: f64 = 0.2;

/// Bucket an architecture lands in after the viability gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Viability {
    Viable,
    ComplexityTax,
    Disqualified,
}

impl Viability {
    /// Short verdict label for the bucket.
    pub fn suitability(&self, pivot_point: f64) -> &'static str {
        match self {
            Viability::Disqualified => "Mathematical Disaster",
            Viability::ComplexityTax => "High Complexity Tax",
            Viability::Viable if pivot_point >= 1.5 => "Mathematically Excellent",
            Viability::Viable => "Sustainable Choice",
        }
    }
}

/// Cost and delivery projection with complexity taxes applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub cost: u64,
    pub timeline_months: u32,
}

/// Three-year total cost of ownership breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeYearTco {
    pub development: u64,
    pub infrastructure: u64,
    pub maintenance: u64,
    pub total: u64,
}

/// One architecture's place in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedArchitecture {
    pub architecture: ArchitectureStyle,
    pub viability: Viability,
    pub suitability: String,
    pub score: ScoreResult,
    pub projection: Projection,
    /// Only present for viable architectures.
    pub referee_score: Option<f64>,
}

/// Partitioned and ordered ranking across all evaluated architectures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub viable: Vec<RankedArchitecture>,
    pub complexity_tax: Vec<RankedArchitecture>,
    pub disqualified: Vec<RankedArchitecture>,
    pub winners: Vec<ArchitectureStyle>,
}

impl RankingResult {
    /// Presentation order: viable, then complexity tax, then disqualified.
    pub fn ordered(&self) -> impl Iterator<Item = &RankedArchitecture> {
        self.viable
            .iter()
            .chain(self.complexity_tax.iter())
            .chain(self.disqualified.iter())
    }

    pub fn find(&self, architecture: ArchitectureStyle) -> Option<&RankedArchitecture> {
        self.ordered().find(|r| r.architecture == architecture)
    }

    pub fn is_winner(&self, architecture: ArchitectureStyle) -> bool {
        self.winners.contains(&architecture)
    }

    /// Top-ranked architecture, if anything is viable.
    pub fn top(&self) -> Option<&RankedArchitecture> {
        self.viable.first()
    }

    pub fn len(&self) -> usize {
        self.viable.len() + self.complexity_tax.len() + self.disqualified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct ArchitectureRanker;

impl ArchitectureRanker {
    /// Applies the viability gate to a single score.
    pub fn classify(score: &ScoreResult) -> Viability {
        if !score.dealbreakers.is_empty() || score.pivot_point < DISQUALIFY_THRESHOLD {
            Viability::Disqualified
        } else if score.pivot_point >= VIABLE_THRESHOLD {
            Viability::Viable
        } else {
            Viability::ComplexityTax
        }
    }

    /// Projects cost and delivery timeline for an architecture at a Pivot Point.
    pub fn project(
        profile: &TeamProfile,
        architecture: ArchitectureStyle,
        pivot_point: f64,
    ) -> Projection {
        let team_multiplier = tables::base_size(profile.team_size) / 4.0;
        let cost = tables::base_cost(architecture)
            * team_multiplier
            * PivotPointEvaluator::complexity_tax(pivot_point);

        let timeline = tables::base_timeline(architecture)
            * tables::delivery_experience_multiplier(profile.experience)
            * PivotPointEvaluator::timeline_tax(pivot_point);

        Projection {
            cost: cost.round() as u64,
            timeline_months: timeline.round() as u32,
        }
    }

    /// Three-year TCO. Development and maintenance scale with team size and
    /// experience efficiency, infrastructure with team size only.
    pub fn three_year_tco(profile: &TeamProfile, architecture: ArchitectureStyle) -> ThreeYearTco {
        let components = tables::cost_components(architecture);
        let size = tables::tco_team_size_multiplier(profile.team_size);
        let efficiency = tables::tco_experience_efficiency(profile.experience);

        let development = (components.development * size * efficiency).round() as u64;
        let infrastructure = (components.infrastructure * size).round() as u64;
        let maintenance = (components.maintenance * size * efficiency).round() as u64;

        ThreeYearTco {
            development,
            infrastructure,
            maintenance,
            total: development + infrastructure + maintenance,
        }
    }

    /// Untaxed months until a first release delivers value.
    pub fn time_to_value(profile: &TeamProfile, architecture: ArchitectureStyle) -> u32 {
        let months = tables::time_to_value_base(architecture)
            * tables::time_to_value_experience(profile.experience)
            * tables::time_to_value_pressure(profile.timeline);
        months.round() as u32
    }

    /// Multiplier charged against a user's own choice in a verdict: the tier
    /// tax compounded with architecture weight and experience penalty.
    pub fn verdict_tax_multiplier(
        profile: &TeamProfile,
        architecture: ArchitectureStyle,
        pivot_point: f64,
    ) -> f64 {
        PivotPointEvaluator::complexity_tax(pivot_point)
            * tables::verdict_architecture_multiplier(architecture)
            * tables::verdict_experience_penalty(profile.experience)
    }

    /// Referee score relative to the fastest and cheapest viable options.
    pub fn referee_score(
        pivot_point: f64,
        projection: &Projection,
        fastest_months: u32,
        lowest_cost: u64,
    ) -> f64 {
        let timeline_advantage = ratio(fastest_months as f64, projection.timeline_months as f64);
        let cost_efficiency = ratio(lowest_cost as f64, projection.cost as f64);

        pivot_point * PIVOT_WEIGHT
            + timeline_advantage * TIMELINE_WEIGHT
            + cost_efficiency * COST_WEIGHT
    }

    /// Ranks a set of scores for one profile.
    ///
    /// # Edge Cases
    /// - No viable architecture: empty `viable` and empty `winners`
    /// - Equal scores: canonical architecture order is kept (stable sort)
    pub fn rank(profile: &TeamProfile, scores: Vec<ScoreResult>) -> RankingResult {
        let mut viable = Vec::new();
        let mut complexity_tax = Vec::new();
        let mut disqualified = Vec::new();

        for score in scores {
            let viability = Self::classify(&score);
            let entry = RankedArchitecture {
                architecture: score.architecture,
                viability,
                suitability: viability.suitability(score.pivot_point).to_string(),
                projection: Self::project(profile, score.architecture, score.pivot_point),
                score,
                referee_score: None,
            };
            match viability {
                Viability::Viable => viable.push(entry),
                Viability::ComplexityTax => complexity_tax.push(entry),
                Viability::Disqualified => disqualified.push(entry),
            }
        }

        let winners = Self::score_viable(&mut viable);

        complexity_tax.sort_by(|a, b| b.score.pivot_point.total_cmp(&a.score.pivot_point));
        disqualified.sort_by(|a, b| b.score.pivot_point.total_cmp(&a.score.pivot_point));

        RankingResult {
            viable,
            complexity_tax,
            disqualified,
            winners,
        }
    }

    /// Fills referee scores, sorts descending and returns the co-winners.
    fn score_viable(viable: &mut [RankedArchitecture]) -> Vec<ArchitectureStyle> {
        let Some(fastest) = viable.iter().map(|r| r.projection.timeline_months).min() else {
            return Vec::new();
        };
        let lowest_cost = viable.iter().map(|r| r.projection.cost).min().unwrap_or(0);

        for entry in viable.iter_mut() {
            entry.referee_score = Some(Self::referee_score(
                entry.score.pivot_point,
                &entry.projection,
                fastest,
                lowest_cost,
            ));
        }

        viable.sort_by(|a, b| referee(b).total_cmp(&referee(a)));

        let top = viable.first().map(referee).unwrap_or(0.0);
        viable
            .iter()
            .filter(|r| top > 0.0 && (top - referee(r)) / top < TIE_TOLERANCE)
            .map(|r| r.architecture)
            .collect()
    }
}

fn referee(entry: &RankedArchitecture) -> f64 {
    entry.referee_score.unwrap_or(0.0)
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{ExperienceLevel, ScaleCategory, TeamSizeBucket, TimelineBucket};
    use crate::domain::scoring::{Dealbreaker, RiskTier};

    fn score(architecture: ArchitectureStyle, pivot_point: f64) -> ScoreResult {
        let tier = RiskTier::from_pivot_point(pivot_point);
        ScoreResult {
            architecture,
            tcs: pivot_point * 10.0,
            aci: 10.0,
            raw_pivot_point: pivot_point,
            cnf: 1.0,
            pivot_point,
            risk_tier: tier,
            complexity_tax_multiplier: tier.complexity_tax(),
            dealbreakers: Vec::new(),
        }
    }

    fn senior_team() -> TeamProfile {
        TeamProfile::new(
            TeamSizeBucket::Medium,
            ExperienceLevel::Senior,
            TimelineBucket::TwelveMonths,
            ScaleCategory::Saas,
        )
    }

    #[test]
    fn classify_buckets() {
        assert_eq!(
            ArchitectureRanker::classify(&score(ArchitectureStyle::Monolith, 1.0)),
            Viability::Viable
        );
        assert_eq!(
            ArchitectureRanker::classify(&score(ArchitectureStyle::Monolith, 0.5)),
            Viability::ComplexityTax
        );
        assert_eq!(
            ArchitectureRanker::classify(&score(ArchitectureStyle::Monolith, 0.49)),
            Viability::Disqualified
        );
    }

    #[test]
    fn dealbreakers_disqualify_regardless_of_pivot_point() {
        let mut s = score(ArchitectureStyle::Microservices, 4.0);
        s.dealbreakers.push(Dealbreaker::MicroservicesJuniorTeam);
        assert_eq!(ArchitectureRanker::classify(&s), Viability::Disqualified);
    }

    #[test]
    fn projection_applies_team_and_taxes() {
        let profile = TeamProfile::new(
            TeamSizeBucket::Small,
            ExperienceLevel::Mixed,
            TimelineBucket::SixMonths,
            ScaleCategory::Saas,
        );
        // critical: cost ×2.5, timeline ×2.0
        let p = ArchitectureRanker::project(&profile, ArchitectureStyle::Monolith, 0.15);
        assert_eq!(p.cost, 375_000);
        assert_eq!(p.timeline_months, 8); // 3 × 1.3 × 2.0 = 7.8
    }

    #[test]
    fn projection_without_tax() {
        let p = ArchitectureRanker::project(&senior_team(), ArchitectureStyle::Serverless, 1.2);
        assert_eq!(p.cost, 400_000); // 200k × 8/4
        assert_eq!(p.timeline_months, 5);
    }

    #[test]
    fn three_year_tco_breakdown() {
        let tco = ArchitectureRanker::three_year_tco(&senior_team(), ArchitectureStyle::Monolith);
        assert_eq!(tco.development, 180_000);
        assert_eq!(tco.infrastructure, 54_000);
        assert_eq!(tco.maintenance, 36_000);
        assert_eq!(tco.total, 270_000);
    }

    #[test]
    fn time_to_value_scales_with_experience_and_pressure() {
        use ArchitectureStyle::*;

        let team = senior_team();
        assert_eq!(ArchitectureRanker::time_to_value(&team, Monolith), 4);
        assert_eq!(ArchitectureRanker::time_to_value(&team, Microservices), 10);

        let default_team = TeamProfile::default();
        assert_eq!(ArchitectureRanker::time_to_value(&default_team, Microservices), 12);
    }

    #[test]
    fn verdict_tax_compounds_tier_architecture_and_experience() {
        let team = TeamProfile::default();
        let multiplier =
            ArchitectureRanker::verdict_tax_multiplier(&team, ArchitectureStyle::Microservices, 0.3);
        assert!((multiplier - 2.5 * 1.5 * 1.1).abs() < 1e-9);

        let experts = TeamProfile::new(
            TeamSizeBucket::Enterprise,
            ExperienceLevel::Expert,
            TimelineBucket::TwelveMonths,
            ScaleCategory::Utility,
        );
        let multiplier =
            ArchitectureRanker::verdict_tax_multiplier(&experts, ArchitectureStyle::Monolith, 4.0);
        assert!((multiplier - 0.9).abs() < 1e-9);
    }

    #[test]
    fn rank_partitions_and_orders() {
        let scores = vec![
            score(ArchitectureStyle::Monolith, 2.0),
            score(ArchitectureStyle::Serverless, 0.6),
            score(ArchitectureStyle::Microservices, 0.3),
            score(ArchitectureStyle::Hybrid, 0.9),
        ];
        let ranking = ArchitectureRanker::rank(&senior_team(), scores);

        assert_eq!(ranking.viable.len(), 1);
        assert_eq!(ranking.complexity_tax.len(), 2);
        assert_eq!(ranking.disqualified.len(), 1);
        assert_eq!(ranking.len(), 4);

        let order: Vec<_> = ranking.ordered().map(|r| r.architecture).collect();
        assert_eq!(
            order,
            vec![
                ArchitectureStyle::Monolith,
                ArchitectureStyle::Hybrid,
                ArchitectureStyle::Serverless,
                ArchitectureStyle::Microservices,
            ]
        );
        assert_eq!(ranking.winners, vec![ArchitectureStyle::Monolith]);
    }

    #[test]
    fn single_viable_scores_against_itself() {
        let scores = vec![score(ArchitectureStyle::Monolith, 2.0)];
        let ranking = ArchitectureRanker::rank(&senior_team(), scores);
        // 2.0 × 0.5 + 1.0 × 0.3 + 1.0 × 0.2
        let referee = ranking.viable[0].referee_score.unwrap();
        assert!((referee - 1.5).abs() < 1e-9);
    }

    #[test]
    fn close_scores_are_co_winners() {
        let scores = vec![
            score(ArchitectureStyle::Monolith, 1.6),
            score(ArchitectureStyle::Serverless, 1.7),
        ];
        let ranking = ArchitectureRanker::rank(&senior_team(), scores);
        assert_eq!(ranking.winners.len(), 2);
    }

    #[test]
    fn distant_scores_have_single_winner() {
        let scores = vec![
            score(ArchitectureStyle::Monolith, 6.0),
            score(ArchitectureStyle::Hybrid, 1.1),
        ];
        let ranking = ArchitectureRanker::rank(&senior_team(), scores);
        assert_eq!(ranking.winners, vec![ArchitectureStyle::Monolith]);
        assert!(!ranking.is_winner(ArchitectureStyle::Hybrid));
    }

    #[test]
    fn no_viable_means_no_winners() {
        let scores = vec![
            score(ArchitectureStyle::Monolith, 0.7),
            score(ArchitectureStyle::Microservices, 0.2),
        ];
        let ranking = ArchitectureRanker::rank(&senior_team(), scores);
        assert!(ranking.viable.is_empty());
        assert!(ranking.winners.is_empty());
        assert!(ranking.top().is_none());
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn suitability_labels() {
        assert_eq!(Viability::Viable.suitability(1.6), "Mathematically Excellent");
        assert_eq!(Viability::Viable.suitability(1.2), "Sustainable Choice");
        assert_eq!(Viability::ComplexityTax.suitability(0.7), "High Complexity Tax");
        assert_eq!(Viability::Disqualified.suitability(3.0), "Mathematical Disaster");
    }
}
