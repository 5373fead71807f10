//! Scale breakpoints and the pivot triggers derived from them.
//!
//! A pivot trigger is a measurable condition under which the team should
//! re-run the evaluation for an architecture.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{ArchitectureStyle, TeamProfile};
use crate::domain::scoring::lookup_tables as tables;

use super::format_thousands;

/// Pivot Point a team should sustain before declaring a migration complete.
pub const TARGET_PIVOT_POINT: f64 = 1.5;

/// Quantified thresholds at which an architecture should be reconsidered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleBreakpoints {
    pub team_threshold: u32,
    /// Requests per second.
    pub traffic_threshold: u32,
    pub deployment_frequency: u32,
    pub service_count: u32,
    pub traffic_variability: u32,
    pub scaling_divergence: u32,
    /// Percent of engineering time.
    pub infra_overhead: u32,
}

impl ScaleBreakpoints {
    /// Breakpoints for an architecture, relative to the team's current headcount.
    pub fn for_architecture(architecture: ArchitectureStyle, headcount: f64) -> Self {
        match architecture {
            ArchitectureStyle::Microservices => Self {
                team_threshold: (headcount * 3.0).max(15.0).ceil() as u32,
                traffic_threshold: 10_000,
                deployment_frequency: 10,
                service_count: 5,
                traffic_variability: 3,
                scaling_divergence: 10,
                infra_overhead: 30,
            },
            ArchitectureStyle::Serverless => Self {
                team_threshold: (headcount * 2.0).max(8.0).ceil() as u32,
                traffic_threshold: 1_000,
                deployment_frequency: 20,
                service_count: 10,
                traffic_variability: 10,
                scaling_divergence: 5,
                infra_overhead: 20,
            },
            ArchitectureStyle::Hybrid => Self {
                team_threshold: (headcount * 2.5).max(12.0).ceil() as u32,
                traffic_threshold: 5_000,
                deployment_frequency: 5,
                service_count: 3,
                traffic_variability: 5,
                scaling_divergence: 20,
                infra_overhead: 25,
            },
            ArchitectureStyle::Monolith => Self {
                team_threshold: headcount.min(8.0).ceil() as u32,
                traffic_threshold: 1_000,
                deployment_frequency: 2,
                service_count: 1,
                traffic_variability: 2,
                scaling_divergence: 2,
                infra_overhead: 10,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    TeamScale,
    Traffic,
    Deployment,
    Operational,
    PivotPoint,
}

/// One measurable reason to re-evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotTrigger {
    pub kind: TriggerKind,
    pub description: String,
}

impl PivotTrigger {
    fn new(kind: TriggerKind, description: String) -> Self {
        Self { kind, description }
    }
}

pub struct PivotTriggerGenerator;

impl PivotTriggerGenerator {
    /// Triggers for reconsidering `architecture`, in a fixed order ending with
    /// the Pivot Point threshold.
    pub fn generate(profile: &TeamProfile, architecture: ArchitectureStyle) -> Vec<PivotTrigger> {
        let headcount = tables::base_size(profile.team_size);
        let b = ScaleBreakpoints::for_architecture(architecture, headcount);

        let (team, traffic, deployment, operational) = match architecture {
            ArchitectureStyle::Microservices => (
                format!(
                    "When your engineering team reaches {} developers across {} squads",
                    b.team_threshold,
                    b.team_threshold.div_ceil(6)
                ),
                format!(
                    "When you consistently handle {} requests/second with {}+ distinct business domains",
                    format_thousands(b.traffic_threshold as u64),
                    b.service_count
                ),
                format!(
                    "When you need {}+ independent deployments daily across separate business units",
                    b.deployment_frequency
                ),
                format!(
                    "When you have dedicated DevOps engineers ({} minimum) and 24/7 on-call rotation",
                    b.team_threshold.div_ceil(15)
                ),
            ),
            ArchitectureStyle::Serverless => (
                format!(
                    "When your team reaches {} developers and needs event-driven architecture",
                    b.team_threshold
                ),
                format!(
                    "When you have highly variable traffic ({}x peak-to-trough ratio) or unpredictable scaling patterns",
                    b.traffic_variability
                ),
                "When you need sub-second deployment of individual functions and automatic scaling"
                    .to_string(),
                format!(
                    "When infrastructure management consumes {}%+ of engineering time",
                    b.infra_overhead
                ),
            ),
            ArchitectureStyle::Hybrid => (
                format!(
                    "When you have {}+ developers split between legacy and greenfield projects",
                    b.team_threshold
                ),
                format!(
                    "When different components have vastly different scaling requirements ({}x difference)",
                    b.scaling_divergence
                ),
                "When you need different deployment cadences for different business units"
                    .to_string(),
                "When you have both legacy constraints and modern scaling requirements".to_string(),
            ),
            ArchitectureStyle::Monolith => (
                format!(
                    "When your team shrinks below {} developers or lacks senior operational expertise",
                    b.team_threshold
                ),
                format!(
                    "When your traffic is predictable (< {}x variation) and under {} requests/second",
                    b.traffic_variability,
                    format_thousands(b.traffic_threshold as u64)
                ),
                format!(
                    "When you can coordinate releases across the entire team (< {} deployments/week)",
                    b.deployment_frequency
                ),
                "When operational simplicity is more valuable than independent scaling".to_string(),
            ),
        };

        vec![
            PivotTrigger::new(TriggerKind::TeamScale, team),
            PivotTrigger::new(TriggerKind::Traffic, traffic),
            PivotTrigger::new(TriggerKind::Deployment, deployment),
            PivotTrigger::new(TriggerKind::Operational, operational),
            PivotTrigger::new(
                TriggerKind::PivotPoint,
                format!(
                    "When your recalculated Pivot Point exceeds {TARGET_PIVOT_POINT} consistently for 6+ months"
                ),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::TeamSizeBucket;

    #[test]
    fn microservices_threshold_has_a_floor() {
        let b = ScaleBreakpoints::for_architecture(ArchitectureStyle::Microservices, 4.0);
        assert_eq!(b.team_threshold, 15);
        let b = ScaleBreakpoints::for_architecture(ArchitectureStyle::Microservices, 8.0);
        assert_eq!(b.team_threshold, 24);
    }

    #[test]
    fn hybrid_threshold_rounds_up() {
        let b = ScaleBreakpoints::for_architecture(ArchitectureStyle::Hybrid, 15.0);
        assert_eq!(b.team_threshold, 38);
    }

    #[test]
    fn monolith_threshold_is_capped() {
        let b = ScaleBreakpoints::for_architecture(ArchitectureStyle::Monolith, 25.0);
        assert_eq!(b.team_threshold, 8);
        let b = ScaleBreakpoints::for_architecture(ArchitectureStyle::Monolith, 2.0);
        assert_eq!(b.team_threshold, 2);
    }

    #[test]
    fn every_architecture_gets_five_triggers() {
        let profile = TeamProfile::default();
        for arch in ArchitectureStyle::ALL {
            let triggers = PivotTriggerGenerator::generate(&profile, arch);
            assert_eq!(triggers.len(), 5);
            assert_eq!(triggers[0].kind, TriggerKind::TeamScale);
            assert_eq!(triggers[4].kind, TriggerKind::PivotPoint);
        }
    }

    #[test]
    fn microservices_triggers_mention_squads_and_traffic() {
        let profile = TeamProfile::default().with_team_size(TeamSizeBucket::Medium);
        let triggers = PivotTriggerGenerator::generate(&profile, ArchitectureStyle::Microservices);
        assert_eq!(
            triggers[0].description,
            "When your engineering team reaches 24 developers across 4 squads"
        );
        assert!(triggers[1].description.contains("10,000 requests/second"));
        assert!(triggers[3].description.contains("(2 minimum)"));
    }

    #[test]
    fn pivot_point_trigger_uses_target() {
        let triggers =
            PivotTriggerGenerator::generate(&TeamProfile::default(), ArchitectureStyle::Monolith);
        assert_eq!(
            triggers[4].description,
            "When your recalculated Pivot Point exceeds 1.5 consistently for 6+ months"
        );
    }
}
