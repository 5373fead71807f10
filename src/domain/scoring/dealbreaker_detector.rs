//! Dealbreaker Detector - hard incompatibilities independent of the Pivot Point.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{ArchitectureStyle, ExperienceLevel, TeamProfile};

use super::lookup_tables as tables;

/// Minimum headcount for microservices.
pub const MICROSERVICES_MIN_TEAM: f64 = 6.0;

/// Minimum timeline, in months, for microservices.
pub const MICROSERVICES_MIN_MONTHS: u32 = 6;

/// A rule-based disqualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dealbreaker {
    MicroservicesTeamTooSmall,
    MicroservicesJuniorTeam,
    MicroservicesTimelineTooShort,
    ServerlessJuniorTeam,
    HybridJuniorTeam,
}

impl Dealbreaker {
    /// Human readable explanation.
    pub fn message(&self) -> &'static str {
        match self {
            Dealbreaker::MicroservicesTeamTooSmall => {
                "Team too small for microservices operational overhead"
            }
            Dealbreaker::MicroservicesJuniorTeam => {
                "Junior team lacks microservices operational expertise"
            }
            Dealbreaker::MicroservicesTimelineTooShort => {
                "Timeline too short for microservices complexity"
            }
            Dealbreaker::ServerlessJuniorTeam => {
                "Junior team risks serverless vendor lock-in and cold start debugging"
            }
            Dealbreaker::HybridJuniorTeam => {
                "Hybrid architecture requires expertise in multiple paradigms"
            }
        }
    }
}

impl std::fmt::Display for Dealbreaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

pub struct DealbreakerDetector;

impl DealbreakerDetector {
    /// Returns every failing rule, one entry per failing condition, in rule order.
    ///
    /// An empty result means no hard blockers.
    pub fn detect(profile: &TeamProfile, architecture: ArchitectureStyle) -> Vec<Dealbreaker> {
        let junior = profile.experience == ExperienceLevel::Junior;
        let mut found = Vec::new();

        match architecture {
            ArchitectureStyle::Microservices => {
                if tables::base_size(profile.team_size) < MICROSERVICES_MIN_TEAM {
                    found.push(Dealbreaker::MicroservicesTeamTooSmall);
                }
                if junior {
                    found.push(Dealbreaker::MicroservicesJuniorTeam);
                }
                if tables::timeline_months(profile.timeline) < MICROSERVICES_MIN_MONTHS {
                    found.push(Dealbreaker::MicroservicesTimelineTooShort);
                }
            }
            ArchitectureStyle::Serverless if junior => {
                found.push(Dealbreaker::ServerlessJuniorTeam);
            }
            ArchitectureStyle::Hybrid if junior => {
                found.push(Dealbreaker::HybridJuniorTeam);
            }
            _ => {}
        }

        found
    }

    /// Convenience for callers that only need the messages.
    pub fn messages(profile: &TeamProfile, architecture: ArchitectureStyle) -> Vec<String> {
        Self::detect(profile, architecture)
            .iter()
            .map(|d| d.message().to_string())
            .collect()
    }
}
