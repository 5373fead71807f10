//! Complexity Scorer - Team Capability Score and Architecture Complexity Index.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{ArchitectureStyle, TeamProfile, WorkloadType};

use super::lookup_tables as tables;

/// The individual coefficients behind a TCS/ACI pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base_size: f64,
    pub experience_multiplier: f64,
    pub timeline_factor: f64,
    pub base_complexity: f64,
    pub timeline_pressure: f64,
    pub scale_multiplier: f64,
    pub workload_type: WorkloadType,
    pub workload_suitability: f64,
    pub context_normalization: f64,
}

/// Pure scoring functions over a team profile.
pub struct ComplexityScorer;

impl ComplexityScorer {
    /// Team Capability Score: `base_size × experience × timeline_factor`.
    pub fn tcs(profile: &TeamProfile) -> f64 {
        tables::base_size(profile.team_size)
            * tables::experience_multiplier(profile.experience)
            * tables::timeline_factor(profile.timeline)
    }

    /// Architecture Complexity Index:
    /// `base_complexity × timeline_pressure × scale_multiplier × WSF`.
    ///
    /// Always positive since every coefficient in the tables is positive.
    pub fn aci(profile: &TeamProfile, architecture: ArchitectureStyle) -> f64 {
        tables::base_complexity(architecture)
            * tables::timeline_pressure(profile.timeline)
            * tables::scale_multiplier(profile.scale)
            * Self::wsf(profile, architecture)
    }

    /// Workload Suitability Factor for the workload inferred from scale.
    pub fn wsf(profile: &TeamProfile, architecture: ArchitectureStyle) -> f64 {
        tables::workload_suitability(tables::workload_type(profile.scale), architecture)
    }

    /// Context Normalization Factor for the profile's scale.
    pub fn cnf(profile: &TeamProfile) -> f64 {
        tables::context_normalization(profile.scale)
    }

    /// Returns every coefficient that went into the scores.
    pub fn breakdown(profile: &TeamProfile, architecture: ArchitectureStyle) -> ScoreBreakdown {
        let workload_type = tables::workload_type(profile.scale);
        ScoreBreakdown {
            base_size: tables::base_size(profile.team_size),
            experience_multiplier: tables::experience_multiplier(profile.experience),
            timeline_factor: tables::timeline_factor(profile.timeline),
            base_complexity: tables::base_complexity(architecture),
            timeline_pressure: tables::timeline_pressure(profile.timeline),
            scale_multiplier: tables::scale_multiplier(profile.scale),
            workload_type,
            workload_suitability: tables::workload_suitability(workload_type, architecture),
            context_normalization: tables::context_normalization(profile.scale),
        }
    }
}
