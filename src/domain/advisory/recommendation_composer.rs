//! Recommendation Composer - override rules and the final verdict.
//!
//! # Override Rules
//!
//! Applied in fixed order, first match wins:
//!
//! | Rule | Condition | Recommends |
//! |------|-----------|------------|
//! | `LowPivotPoint` | pivot(choice) < 0.8 | monolith |
//! | `CrisisTimeline` | 1-month timeline and choice is not monolith | monolith |
//! | `SmallTeam` | team of 1 or 2 choosing microservices | monolith |
//! | `JuniorTeam` | junior team choosing microservices or hybrid | monolith |
//! | `PlatformScale` | platform scale and pivot(choice) > 1.5 | microservices |
//! | `UserChoiceSound` | otherwise | the user's choice |

use serde::{Deserialize, Serialize};

use crate::domain::profile::{
    ArchitectureStyle, ExperienceLevel, ScaleCategory, TeamProfile, TeamSizeBucket,
    TimelineBucket,
};
use crate::domain::scoring::lookup_tables::COST_PER_PERSON_MONTH;
use crate::domain::scoring::{
    ArchitectureRanker, Persona, ScoreResult, ScoringEngine, ThreeYearTco,
};

use super::migration::{MigrationPlanner, Roadmap};
use super::pivot_triggers::{PivotTrigger, PivotTriggerGenerator};

/// Pivot Point below which the user's choice is always overridden.
pub const OVERRIDE_THRESHOLD: f64 = 0.8;

/// Pivot Point above which a platform-scale team is steered to microservices.
pub const PLATFORM_THRESHOLD: f64 = 1.5;

/// Cost gap under which two options count as equivalent.
pub const EQUIVALENT_COST_GAP: u64 = 50_000;

/// Cost of one major feature, used in the reinvestment narrative.
pub const FEATURE_COST: u64 = 50_000;

/// The rule that decided a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideRule {
    LowPivotPoint,
    CrisisTimeline,
    SmallTeam,
    JuniorTeam,
    PlatformScale,
    UserChoiceSound,
}

impl OverrideRule {
    pub fn reason(&self) -> &'static str {
        match self {
            OverrideRule::LowPivotPoint => {
                "Team capability is too low for the chosen architecture's complexity"
            }
            OverrideRule::CrisisTimeline => "A one-month timeline leaves room only for a monolith",
            OverrideRule::SmallTeam => "Teams of one or two cannot absorb microservices overhead",
            OverrideRule::JuniorTeam => "Junior teams need a single, simple paradigm",
            OverrideRule::PlatformScale => {
                "Platform scale with a highly capable team justifies microservices"
            }
            OverrideRule::UserChoiceSound => "The chosen architecture fits the team",
        }
    }
}

/// Recommended architecture plus the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub architecture: ArchitectureStyle,
    pub rule: OverrideRule,
}

/// TCO and time to value for one side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureCost {
    pub architecture: ArchitectureStyle,
    pub three_year_tco: ThreeYearTco,
    pub time_to_value_months: u32,
    /// 1.0 for the recommended side.
    pub tax_multiplier: f64,
    pub taxed_tco_total: u64,
    pub taxed_time_to_value_months: u32,
}

/// User's choice against the recommendation. Only the user's side is taxed.
/// Differences are user minus recommended, so positive numbers mean the
/// user's choice costs more.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComparison {
    pub user: ArchitectureCost,
    pub recommended: ArchitectureCost,
    pub cost_difference: i64,
    pub timeline_difference_months: i64,
}

/// What the cost gap could fund instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Reinvestment {
    /// The options cost about the same.
    Equivalent,
    /// The user's choice is approved and already cost-effective.
    Optimized,
    #[serde(rename_all = "camelCase")]
    Reallocate {
        amount: u64,
        developer_months: u64,
        major_features: u64,
    },
}

impl Reinvestment {
    pub fn assess(cost_gap: u64, approved: bool) -> Self {
        if cost_gap < EQUIVALENT_COST_GAP {
            Reinvestment::Equivalent
        } else if approved {
            Reinvestment::Optimized
        } else {
            Reinvestment::Reallocate {
                amount: cost_gap,
                developer_months: cost_gap / COST_PER_PERSON_MONTH,
                major_features: cost_gap / FEATURE_COST,
            }
        }
    }
}

/// Final structured verdict for a user's choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub profile: TeamProfile,
    pub user_choice: ArchitectureStyle,
    pub recommended: ArchitectureStyle,
    pub rule: OverrideRule,
    pub reason: String,
    pub approved: bool,
    pub persona: Persona,
    pub user_score: ScoreResult,
    pub recommended_score: ScoreResult,
    pub comparison: CostComparison,
    pub dealbreakers: Vec<String>,
    pub roadmap: Roadmap,
    pub pivot_triggers: Vec<PivotTrigger>,
    pub reinvestment: Reinvestment,
    pub confidence: u8,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationComposer {
    engine: ScoringEngine,
}

impl RecommendationComposer {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// Applies the override rules to the user's choice.
    pub fn recommend(&self, profile: &TeamProfile, user_choice: ArchitectureStyle) -> Recommendation {
        let pivot_point = self.engine.pivot_point(profile, user_choice);
        let rule = Self::select_rule(profile, user_choice, pivot_point);

        let architecture = match rule {
            OverrideRule::UserChoiceSound => user_choice,
            OverrideRule::PlatformScale => ArchitectureStyle::Microservices,
            _ => ArchitectureStyle::Monolith,
        };

        Recommendation { architecture, rule }
    }

    fn select_rule(
        profile: &TeamProfile,
        user_choice: ArchitectureStyle,
        pivot_point: f64,
    ) -> OverrideRule {
        use ArchitectureStyle::*;

        if pivot_point < OVERRIDE_THRESHOLD {
            OverrideRule::LowPivotPoint
        } else if profile.timeline == TimelineBucket::OneMonth && user_choice != Monolith {
            OverrideRule::CrisisTimeline
        } else if matches!(profile.team_size, TeamSizeBucket::Solo | TeamSizeBucket::Pair)
            && user_choice == Microservices
        {
            OverrideRule::SmallTeam
        } else if profile.experience == ExperienceLevel::Junior
            && matches!(user_choice, Microservices | Hybrid)
        {
            OverrideRule::JuniorTeam
        } else if profile.scale == ScaleCategory::Platform && pivot_point > PLATFORM_THRESHOLD {
            OverrideRule::PlatformScale
        } else {
            OverrideRule::UserChoiceSound
        }
    }

    /// Builds the full verdict for a user's choice.
    pub fn compose(&self, profile: &TeamProfile, user_choice: ArchitectureStyle) -> Verdict {
        let recommendation = self.recommend(profile, user_choice);
        let recommended = recommendation.architecture;
        let approved = recommended == user_choice;

        let user_score = self.engine.evaluate(profile, user_choice);
        let recommended_score = self.engine.evaluate(profile, recommended);

        let comparison = compare(profile, &user_score, recommended);

        let roadmap = if approved {
            MigrationPlanner::evolution()
        } else {
            Roadmap::Migration(MigrationPlanner::plan(profile, recommended, user_choice))
        };

        let reinvestment = Reinvestment::assess(comparison.cost_difference.unsigned_abs(), approved);
        let confidence = Self::confidence(user_score.pivot_point, approved);

        tracing::debug!(
            user_choice = user_choice.label(),
            recommended = recommended.label(),
            rule = ?recommendation.rule,
            pivot_point = user_score.pivot_point,
            confidence,
            "verdict composed"
        );

        Verdict {
            profile: *profile,
            user_choice,
            recommended,
            rule: recommendation.rule,
            reason: recommendation.rule.reason().to_string(),
            approved,
            persona: user_score.persona(),
            dealbreakers: user_score
                .dealbreakers
                .iter()
                .map(|d| d.message().to_string())
                .collect(),
            pivot_triggers: PivotTriggerGenerator::generate(profile, user_choice),
            user_score,
            recommended_score,
            comparison,
            roadmap,
            reinvestment,
            confidence,
        }
    }

    /// Confidence in the ruling, 60 to 95.
    ///
    /// High when overriding a poor choice or approving an excellent one.
    pub fn confidence(pivot_point: f64, approved: bool) -> u8 {
        let score: u8 = if pivot_point < 0.5 {
            if approved { 60 } else { 95 }
        } else if pivot_point < 1.0 {
            if approved { 70 } else { 85 }
        } else if pivot_point > 1.5 {
            if approved { 95 } else { 60 }
        } else if approved {
            85
        } else {
            75
        };
        score.clamp(60, 95)
    }
}

fn compare(
    profile: &TeamProfile,
    user: &ScoreResult,
    recommended: ArchitectureStyle,
) -> CostComparison {
    let tax =
        ArchitectureRanker::verdict_tax_multiplier(profile, user.architecture, user.pivot_point);
    let user = architecture_cost(profile, user.architecture, tax);
    let recommended = architecture_cost(profile, recommended, 1.0);

    CostComparison {
        cost_difference: user.taxed_tco_total as i64 - recommended.taxed_tco_total as i64,
        timeline_difference_months: user.taxed_time_to_value_months as i64
            - recommended.taxed_time_to_value_months as i64,
        user,
        recommended,
    }
}

fn architecture_cost(
    profile: &TeamProfile,
    architecture: ArchitectureStyle,
    tax_multiplier: f64,
) -> ArchitectureCost {
    let three_year_tco = ArchitectureRanker::three_year_tco(profile, architecture);
    let time_to_value_months = ArchitectureRanker::time_to_value(profile, architecture);
    ArchitectureCost {
        architecture,
        three_year_tco,
        time_to_value_months,
        tax_multiplier,
        taxed_tco_total: (three_year_tco.total as f64 * tax_multiplier).round() as u64,
        taxed_time_to_value_months: (time_to_value_months as f64 * tax_multiplier).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::EngineOptions;

    fn composer() -> RecommendationComposer {
        RecommendationComposer::default()
    }

    fn profile(
        team_size: TeamSizeBucket,
        experience: ExperienceLevel,
        timeline: TimelineBucket,
        scale: ScaleCategory,
    ) -> TeamProfile {
        TeamProfile::new(team_size, experience, timeline, scale)
    }

    #[test]
    fn low_pivot_forces_monolith() {
        let rec = composer().recommend(&TeamProfile::default(), ArchitectureStyle::Microservices);
        assert_eq!(rec.architecture, ArchitectureStyle::Monolith);
        assert_eq!(rec.rule, OverrideRule::LowPivotPoint);
    }

    #[test]
    fn low_pivot_wins_even_for_monolith_choice() {
        let rec = composer().recommend(&TeamProfile::default(), ArchitectureStyle::Monolith);
        assert_eq!(rec.architecture, ArchitectureStyle::Monolith);
        assert_eq!(rec.rule, OverrideRule::LowPivotPoint);
    }

    #[test]
    fn crisis_timeline_forces_monolith_once_normalized() {
        // tcs 22.5, serverless aci 93.6 on a bursty consumer workload; × CNF 8 ≈ 1.92
        let p = profile(
            TeamSizeBucket::Enterprise,
            ExperienceLevel::Expert,
            TimelineBucket::OneMonth,
            ScaleCategory::Consumer,
        );
        let normalized = RecommendationComposer::new(ScoringEngine::new(EngineOptions {
            context_normalization: true,
        }));
        let rec = normalized.recommend(&p, ArchitectureStyle::Serverless);
        assert_eq!(rec.architecture, ArchitectureStyle::Monolith);
        assert_eq!(rec.rule, OverrideRule::CrisisTimeline);

        let rec = composer().recommend(&p, ArchitectureStyle::Serverless);
        assert_eq!(rec.rule, OverrideRule::LowPivotPoint);
    }

    #[test]
    fn select_rule_precedence() {
        use ArchitectureStyle::*;

        let crisis = profile(
            TeamSizeBucket::Pair,
            ExperienceLevel::Junior,
            TimelineBucket::OneMonth,
            ScaleCategory::Platform,
        );
        assert_eq!(
            RecommendationComposer::select_rule(&crisis, Microservices, 0.79),
            OverrideRule::LowPivotPoint
        );
        assert_eq!(
            RecommendationComposer::select_rule(&crisis, Microservices, 2.0),
            OverrideRule::CrisisTimeline
        );

        let small = crisis.with_timeline(TimelineBucket::TwelveMonths);
        assert_eq!(
            RecommendationComposer::select_rule(&small, Microservices, 2.0),
            OverrideRule::SmallTeam
        );
        assert_eq!(
            RecommendationComposer::select_rule(&small, Hybrid, 2.0),
            OverrideRule::JuniorTeam
        );
        assert_eq!(
            RecommendationComposer::select_rule(&small, Serverless, 2.0),
            OverrideRule::PlatformScale
        );
        assert_eq!(
            RecommendationComposer::select_rule(&small, Serverless, 1.5),
            OverrideRule::UserChoiceSound
        );
    }

    #[test]
    fn platform_scale_steers_capable_team_to_microservices() {
        // tcs 25 × 1.5 × 1.4 = 52.5; monolith aci 20 × 0.6 × 1.6 = 19.2; pivot ≈ 2.73
        let p = profile(
            TeamSizeBucket::Enterprise,
            ExperienceLevel::Expert,
            TimelineBucket::EighteenPlus,
            ScaleCategory::Platform,
        );
        let rec = composer().recommend(&p, ArchitectureStyle::Monolith);
        assert_eq!(rec.architecture, ArchitectureStyle::Microservices);
        assert_eq!(rec.rule, OverrideRule::PlatformScale);
    }

    #[test]
    fn sound_choice_is_approved_with_evolution_roadmap() {
        let p = profile(
            TeamSizeBucket::Enterprise,
            ExperienceLevel::Expert,
            TimelineBucket::TwelveMonths,
            ScaleCategory::Utility,
        );
        let verdict = composer().compose(&p, ArchitectureStyle::Monolith);
        assert!(verdict.approved);
        assert_eq!(verdict.rule, OverrideRule::UserChoiceSound);
        assert!(matches!(verdict.roadmap, Roadmap::Evolution { .. }));
        // The user's own choice still pays the expert discount: 410400 × 0.9
        assert_eq!(verdict.comparison.user.taxed_tco_total, 369_360);
        assert_eq!(verdict.comparison.recommended.taxed_tco_total, 410_400);
        assert_eq!(verdict.comparison.cost_difference, -41_040);
        assert_eq!(verdict.comparison.timeline_difference_months, 0);
        assert_eq!(verdict.reinvestment, Reinvestment::Equivalent);
        assert_eq!(verdict.confidence, 95);
        assert_eq!(verdict.persona, Persona::Cto);
    }

    #[test]
    fn overridden_choice_gets_migration_plan_from_recommendation() {
        let verdict = composer().compose(&TeamProfile::default(), ArchitectureStyle::Microservices);
        assert!(!verdict.approved);
        assert_eq!(verdict.recommended, ArchitectureStyle::Monolith);
        assert_eq!(
            verdict.dealbreakers,
            vec!["Team too small for microservices operational overhead".to_string()]
        );

        let Roadmap::Migration(plan) = &verdict.roadmap else {
            panic!("expected a migration roadmap");
        };
        assert_eq!(plan.from, ArchitectureStyle::Monolith);
        assert_eq!(plan.to, ArchitectureStyle::Microservices);
        assert_eq!(plan.effort_person_months, 18);

        assert!(verdict.comparison.cost_difference > 0);
        assert!(matches!(
            verdict.reinvestment,
            Reinvestment::Reallocate { .. }
        ));
        assert_eq!(verdict.confidence, 95);
    }

    #[test]
    fn only_the_user_side_is_taxed() {
        // critical 2.5 × microservices 1.5 × mixed 1.1
        let verdict = composer().compose(&TeamProfile::default(), ArchitectureStyle::Microservices);
        let comparison = verdict.comparison;

        assert!((comparison.user.tax_multiplier - 4.125).abs() < 1e-9);
        assert_eq!(comparison.user.three_year_tco.total, 565_600);
        assert_eq!(comparison.user.taxed_tco_total, 2_333_100);
        assert_eq!(comparison.user.time_to_value_months, 12);
        assert_eq!(comparison.user.taxed_time_to_value_months, 50);

        assert_eq!(comparison.recommended.tax_multiplier, 1.0);
        assert_eq!(comparison.recommended.taxed_tco_total, 223_200);
        assert_eq!(comparison.recommended.taxed_time_to_value_months, 5);

        assert_eq!(comparison.cost_difference, 2_109_900);
        assert_eq!(comparison.timeline_difference_months, 45);
        assert_eq!(
            verdict.reinvestment,
            Reinvestment::Reallocate {
                amount: 2_109_900,
                developer_months: 175,
                major_features: 42,
            }
        );
    }

    #[test]
    fn reinvestment_thresholds() {
        assert_eq!(Reinvestment::assess(49_999, false), Reinvestment::Equivalent);
        assert_eq!(Reinvestment::assess(120_000, true), Reinvestment::Optimized);
        assert_eq!(
            Reinvestment::assess(120_000, false),
            Reinvestment::Reallocate {
                amount: 120_000,
                developer_months: 10,
                major_features: 2,
            }
        );
    }

    #[test]
    fn confidence_table() {
        assert_eq!(RecommendationComposer::confidence(0.3, true), 60);
        assert_eq!(RecommendationComposer::confidence(0.3, false), 95);
        assert_eq!(RecommendationComposer::confidence(0.9, true), 70);
        assert_eq!(RecommendationComposer::confidence(0.9, false), 85);
        assert_eq!(RecommendationComposer::confidence(1.2, true), 85);
        assert_eq!(RecommendationComposer::confidence(1.2, false), 75);
        assert_eq!(RecommendationComposer::confidence(1.5, true), 85);
        assert_eq!(RecommendationComposer::confidence(2.0, false), 60);
    }
}
