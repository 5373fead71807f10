//! Migration cost planning and phased roadmaps.
//!
//! A migration plan moves a team from the recommended architecture toward the
//! one it asked for, in three stages costed at 20%, 30% and 50% of the total.
//! When the choice is approved an evolution roadmap is returned instead.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{ArchitectureStyle, TeamProfile, TeamSizeBucket};
use crate::domain::scoring::lookup_tables::{self as tables, COST_PER_PERSON_MONTH};

const PREPARATION_SHARE: f64 = 0.2;
const PILOT_SHARE: f64 = 0.3;
const FULL_SCALE_SHARE: f64 = 0.5;

/// Candidate services for a first extraction, picked by team size.
const PILOT_SERVICES: [&str; 5] = [
    "User Notification Service",
    "File Upload Service",
    "Email Service",
    "Audit Logging Service",
    "Report Generation Service",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapPhase {
    Preparation,
    Pilot,
    FullScale,
    Foundation,
    Optimization,
    ScalePreparation,
}

/// One stage of a roadmap with its month range and investment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStage {
    pub phase: RoadmapPhase,
    pub title: String,
    pub start_month: u32,
    pub end_month: u32,
    pub investment: u64,
    pub actions: Vec<String>,
}

/// Costed migration between two architectures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationPlan {
    pub from: ArchitectureStyle,
    pub to: ArchitectureStyle,
    pub effort_person_months: u32,
    pub total_cost: u64,
    pub preparation_cost: u64,
    pub pilot_cost: u64,
    pub scale_cost: u64,
    pub pilot_service: String,
    pub stages: Vec<RoadmapStage>,
}

/// Roadmap attached to a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roadmap {
    Migration(MigrationPlan),
    Evolution { stages: Vec<RoadmapStage> },
}

impl Roadmap {
    pub fn stages(&self) -> &[RoadmapStage] {
        match self {
            Roadmap::Migration(plan) => &plan.stages,
            Roadmap::Evolution { stages } => stages,
        }
    }
}

pub struct MigrationPlanner;

impl MigrationPlanner {
    /// Plans the move `from` → `to` for the profile's team.
    pub fn plan(
        profile: &TeamProfile,
        from: ArchitectureStyle,
        to: ArchitectureStyle,
    ) -> MigrationPlan {
        let effort = tables::migration_effort(from, to);
        let headcount = tables::base_size(profile.team_size);
        let total_cost = (effort as f64 * headcount).round() as u64 * COST_PER_PERSON_MONTH;

        let preparation_cost = share(total_cost, PREPARATION_SHARE);
        let pilot_cost = share(total_cost, PILOT_SHARE);
        let scale_cost = share(total_cost, FULL_SCALE_SHARE);
        let pilot_service = Self::pilot_service(profile.team_size).to_string();

        let [prep, pilot, full] = stage_months(from, to);
        let [prep_actions, pilot_actions, full_actions] = stage_actions(from, to, &pilot_service);

        let stages = vec![
            RoadmapStage {
                phase: RoadmapPhase::Preparation,
                title: "Preparation".to_string(),
                start_month: prep.0,
                end_month: prep.1,
                investment: preparation_cost,
                actions: prep_actions,
            },
            RoadmapStage {
                phase: RoadmapPhase::Pilot,
                title: "The Pilot".to_string(),
                start_month: pilot.0,
                end_month: pilot.1,
                investment: pilot_cost,
                actions: pilot_actions,
            },
            RoadmapStage {
                phase: RoadmapPhase::FullScale,
                title: "Full Scale".to_string(),
                start_month: full.0,
                end_month: full.1,
                investment: scale_cost,
                actions: full_actions,
            },
        ];

        MigrationPlan {
            from,
            to,
            effort_person_months: effort,
            total_cost,
            preparation_cost,
            pilot_cost,
            scale_cost,
            pilot_service,
            stages,
        }
    }

    /// Fixed three-phase evolution roadmap for an approved choice.
    pub fn evolution() -> Roadmap {
        let stage = |phase, title: &str, start, end, investment, actions: [&str; 3]| RoadmapStage {
            phase,
            title: title.to_string(),
            start_month: start,
            end_month: end,
            investment,
            actions: actions.iter().map(|a| a.to_string()).collect(),
        };

        Roadmap::Evolution {
            stages: vec![
                stage(
                    RoadmapPhase::Foundation,
                    "Foundation",
                    1,
                    6,
                    50_000,
                    [
                        "Establish monitoring and observability baselines",
                        "Document architectural decision records (ADRs)",
                        "Set up automated testing and deployment pipelines",
                    ],
                ),
                stage(
                    RoadmapPhase::Optimization,
                    "Optimization",
                    7,
                    12,
                    75_000,
                    [
                        "Performance tuning and bottleneck identification",
                        "Team skill development and knowledge sharing",
                        "Capacity planning for anticipated growth",
                    ],
                ),
                stage(
                    RoadmapPhase::ScalePreparation,
                    "Scale Preparation",
                    13,
                    18,
                    100_000,
                    [
                        "Prepare for future architectural evolution when triggers are hit",
                        "Establish migration-ready code boundaries",
                        "Build operational expertise for next-level complexity",
                    ],
                ),
            ],
        }
    }

    /// Deterministic pilot service for a team size.
    pub fn pilot_service(team_size: TeamSizeBucket) -> &'static str {
        let index = TeamSizeBucket::ALL
            .iter()
            .position(|b| *b == team_size)
            .unwrap_or(0);
        PILOT_SERVICES[index % PILOT_SERVICES.len()]
    }
}

fn share(total: u64, fraction: f64) -> u64 {
    (total as f64 * fraction).round() as u64
}

fn stage_months(from: ArchitectureStyle, to: ArchitectureStyle) -> [(u32, u32); 3] {
    use ArchitectureStyle::*;

    match (from, to) {
        (Monolith, Serverless) => [(1, 4), (5, 8), (9, 18)],
        (Microservices, Monolith) => [(1, 3), (4, 8), (9, 18)],
        _ => [(1, 6), (7, 12), (13, 24)],
    }
}

fn stage_actions(
    from: ArchitectureStyle,
    to: ArchitectureStyle,
    pilot_service: &str,
) -> [Vec<String>; 3] {
    use ArchitectureStyle::*;

    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    match (from, to) {
        (Monolith, Serverless) => [
            owned(&[
                "Refactor code into pure functions with clear input/output contracts",
                "Implement event-driven patterns within your monolith",
                "Set up cloud-native monitoring and observability",
            ]),
            owned(&[
                "Extract background jobs and async processes to serverless functions",
                "Implement event sourcing for pilot workloads",
                "Establish serverless CI/CD and monitoring",
            ]),
            owned(&[
                "Migrate API endpoints to serverless functions",
                "Implement full event-driven architecture",
            ]),
        ],
        (Microservices, Monolith) => [
            owned(&[
                "Audit service dependencies and identify consolidation candidates",
                "Design unified data model and migration strategy",
                "Plan gradual service retirement roadmap",
            ]),
            owned(&[
                "Merge closely coupled services with minimal external dependencies",
                "Consolidate shared databases and eliminate distributed transactions",
            ]),
            owned(&[
                "Complete service consolidation based on business domain boundaries",
                "Simplify deployment and monitoring infrastructure",
            ]),
        ],
        _ => [
            owned(&[
                "Establish domain boundaries and API contracts between modules",
                "Set up comprehensive monitoring and distributed tracing",
                "Build a CI/CD pipeline that can handle multiple deployment targets",
            ]),
            vec![
                format!(
                    "Extract your least critical, most isolated component (recommendation: {pilot_service})"
                ),
                format!("Run the pilot on {} with full rollback capability", to.display_name()),
                "Establish monitoring, logging, and alerting for the new runtime".to_string(),
            ],
            owned(&[
                "Migrate remaining components based on business priority and coupling analysis",
                "Implement the full observability stack",
                "Train the team on the new operational model",
            ]),
        ],
    }
}
