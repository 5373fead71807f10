//! Canonical coefficient tables.
//!
//! Every categorical input maps to a coefficient through an exhaustive `match`,
//! so lookups are total. Unknown raw values never reach this module; they are
//! resolved to neutral defaults when the profile is parsed.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{
    ArchitectureStyle, ExperienceLevel, ScaleCategory, TeamSizeBucket, TimelineBucket,
    WorkloadType,
};

/// Identifies the coefficient set in responses and logs.
pub const COEFFICIENT_SET_VERSION: &str = "referee-v2";

/// Dollars per person-month used for migration costing.
pub const COST_PER_PERSON_MONTH: u64 = 12_000;

/// Migration effort used when no pair-specific figure exists.
pub const DEFAULT_MIGRATION_EFFORT: u32 = 12;

// ─────────────────────────────────────────────────────────────────────
// Team capability
// ─────────────────────────────────────────────────────────────────────

/// Representative headcount for a team size bucket.
pub fn base_size(team_size: TeamSizeBucket) -> f64 {
    match team_size {
        TeamSizeBucket::Solo => 1.0,
        TeamSizeBucket::Pair => 2.0,
        TeamSizeBucket::Small => 4.0,
        TeamSizeBucket::Medium => 8.0,
        TeamSizeBucket::Large => 15.0,
        TeamSizeBucket::Enterprise => 25.0,
    }
}

/// Capability multiplier applied to team size.
pub fn experience_multiplier(experience: ExperienceLevel) -> f64 {
    match experience {
        ExperienceLevel::Junior => 0.5,
        ExperienceLevel::Mixed => 0.75,
        ExperienceLevel::Senior => 1.0,
        ExperienceLevel::Expert => 1.5,
    }
}

/// Longer timelines give the team more room to absorb complexity.
pub fn timeline_factor(timeline: TimelineBucket) -> f64 {
    match timeline {
        TimelineBucket::OneMonth => 0.6,
        TimelineBucket::ThreeMonths => 0.8,
        TimelineBucket::SixMonths => 1.0,
        TimelineBucket::TwelveMonths => 1.2,
        TimelineBucket::EighteenPlus => 1.4,
    }
}

/// Numeric month count a timeline bucket stands for.
pub fn timeline_months(timeline: TimelineBucket) -> u32 {
    match timeline {
        TimelineBucket::OneMonth => 1,
        TimelineBucket::ThreeMonths => 3,
        TimelineBucket::SixMonths => 6,
        TimelineBucket::TwelveMonths => 12,
        TimelineBucket::EighteenPlus => 18,
    }
}

// ─────────────────────────────────────────────────────────────────────
// Architecture complexity
// ─────────────────────────────────────────────────────────────────────

pub fn base_complexity(architecture: ArchitectureStyle) -> f64 {
    match architecture {
        ArchitectureStyle::Monolith => 20.0,
        ArchitectureStyle::Serverless => 60.0,
        ArchitectureStyle::Microservices => 80.0,
        ArchitectureStyle::Hybrid => 65.0,
    }
}

pub fn timeline_pressure(timeline: TimelineBucket) -> f64 {
    match timeline {
        TimelineBucket::OneMonth => 2.0,
        TimelineBucket::ThreeMonths => 1.5,
        TimelineBucket::SixMonths => 1.0,
        TimelineBucket::TwelveMonths => 0.8,
        TimelineBucket::EighteenPlus => 0.6,
    }
}

pub fn scale_multiplier(scale: ScaleCategory) -> f64 {
    match scale {
        ScaleCategory::Utility => 0.8,
        ScaleCategory::Saas => 1.0,
        ScaleCategory::Consumer => 1.3,
        ScaleCategory::Platform => 1.6,
    }
}

pub fn workload_type(scale: ScaleCategory) -> WorkloadType {
    match scale {
        ScaleCategory::Utility => WorkloadType::Steady,
        ScaleCategory::Saas => WorkloadType::Mixed,
        ScaleCategory::Consumer => WorkloadType::Bursty,
        ScaleCategory::Platform => WorkloadType::Mixed,
    }
}

/// Workload Suitability Factor.
pub fn workload_suitability(workload: WorkloadType, architecture: ArchitectureStyle) -> f64 {
    use ArchitectureStyle::*;

    match (workload, architecture) {
        (WorkloadType::Steady, Monolith) => 0.8,
        (WorkloadType::Steady, Serverless) => 1.2,
        (WorkloadType::Steady, Microservices) => 1.1,
        (WorkloadType::Steady, Hybrid) => 1.0,
        (WorkloadType::Mixed, _) => 1.0,
        (WorkloadType::Bursty, Monolith) => 1.2,
        (WorkloadType::Bursty, Serverless) => 0.6,
        (WorkloadType::Bursty, Microservices) => 0.9,
        (WorkloadType::Bursty, Hybrid) => 1.1,
    }
}

/// Context Normalization Factor. Depends on scale only, so it rescales every
/// architecture's Pivot Point by the same amount.
pub fn context_normalization(scale: ScaleCategory) -> f64 {
    match scale {
        ScaleCategory::Utility => 3.0,
        ScaleCategory::Saas => 5.0,
        ScaleCategory::Consumer => 8.0,
        ScaleCategory::Platform => 6.0,
    }
}

// ─────────────────────────────────────────────────────────────────────
// Cost and delivery projections
// ─────────────────────────────────────────────────────────────────────

/// Base projected cost for a reference team of four.
pub fn base_cost(architecture: ArchitectureStyle) -> f64 {
    match architecture {
        ArchitectureStyle::Monolith => 150_000.0,
        ArchitectureStyle::Serverless => 200_000.0,
        ArchitectureStyle::Microservices => 350_000.0,
        ArchitectureStyle::Hybrid => 280_000.0,
    }
}

/// Base time-to-value in months.
pub fn base_timeline(architecture: ArchitectureStyle) -> f64 {
    match architecture {
        ArchitectureStyle::Monolith => 3.0,
        ArchitectureStyle::Serverless => 5.0,
        ArchitectureStyle::Microservices => 9.0,
        ArchitectureStyle::Hybrid => 7.0,
    }
}

/// Delivery slowdown by experience. Distinct from the capability multiplier.
pub fn delivery_experience_multiplier(experience: ExperienceLevel) -> f64 {
    match experience {
        ExperienceLevel::Junior => 1.8,
        ExperienceLevel::Mixed => 1.3,
        ExperienceLevel::Senior => 1.0,
        ExperienceLevel::Expert => 0.8,
    }
}

/// Three-year cost components for a reference team.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComponents {
    pub development: f64,
    pub infrastructure: f64,
    pub maintenance: f64,
}

impl CostComponents {
    pub fn total(&self) -> f64 {
        self.development + self.infrastructure + self.maintenance
    }
}

pub fn cost_components(architecture: ArchitectureStyle) -> CostComponents {
    let (development, infrastructure, maintenance) = match architecture {
        ArchitectureStyle::Monolith => (120_000.0, 36_000.0, 24_000.0),
        ArchitectureStyle::Serverless => (180_000.0, 54_000.0, 36_000.0),
        ArchitectureStyle::Microservices => (280_000.0, 108_000.0, 72_000.0),
        ArchitectureStyle::Hybrid => (240_000.0, 84_000.0, 60_000.0),
    };
    CostComponents {
        development,
        infrastructure,
        maintenance,
    }
}

pub fn tco_team_size_multiplier(team_size: TeamSizeBucket) -> f64 {
    match team_size {
        TeamSizeBucket::Solo => 0.5,
        TeamSizeBucket::Pair => 0.7,
        TeamSizeBucket::Small => 1.0,
        TeamSizeBucket::Medium => 1.5,
        TeamSizeBucket::Large => 2.0,
        TeamSizeBucket::Enterprise => 3.0,
    }
}

pub fn tco_experience_efficiency(experience: ExperienceLevel) -> f64 {
    match experience {
        ExperienceLevel::Junior => 1.8,
        ExperienceLevel::Mixed => 1.3,
        ExperienceLevel::Senior => 1.0,
        ExperienceLevel::Expert => 0.7,
    }
}

// ─────────────────────────────────────────────────────────────────────
// Verdict comparison
// ─────────────────────────────────────────────────────────────────────

/// Months until a first release delivers value, before experience and pressure.
pub fn time_to_value_base(architecture: ArchitectureStyle) -> f64 {
    match architecture {
        ArchitectureStyle::Monolith => 3.0,
        ArchitectureStyle::Serverless => 4.0,
        ArchitectureStyle::Microservices => 8.0,
        ArchitectureStyle::Hybrid => 6.0,
    }
}

pub fn time_to_value_experience(experience: ExperienceLevel) -> f64 {
    match experience {
        ExperienceLevel::Junior => 2.0,
        ExperienceLevel::Mixed => 1.5,
        ExperienceLevel::Senior => 1.0,
        ExperienceLevel::Expert => 0.8,
    }
}

/// Crisis timelines force faster, rougher delivery; long ones stretch it.
pub fn time_to_value_pressure(timeline: TimelineBucket) -> f64 {
    match timeline {
        TimelineBucket::OneMonth => 0.7,
        TimelineBucket::ThreeMonths => 0.9,
        TimelineBucket::SixMonths => 1.0,
        TimelineBucket::TwelveMonths => 1.2,
        TimelineBucket::EighteenPlus => 1.5,
    }
}

/// Extra verdict tax for the operational weight of an architecture.
pub fn verdict_architecture_multiplier(architecture: ArchitectureStyle) -> f64 {
    match architecture {
        ArchitectureStyle::Monolith => 1.0,
        ArchitectureStyle::Serverless => 1.2,
        ArchitectureStyle::Microservices => 1.5,
        ArchitectureStyle::Hybrid => 1.4,
    }
}

/// Extra verdict tax by experience. Expert teams get a discount.
pub fn verdict_experience_penalty(experience: ExperienceLevel) -> f64 {
    match experience {
        ExperienceLevel::Junior => 1.3,
        ExperienceLevel::Mixed => 1.1,
        ExperienceLevel::Senior => 1.0,
        ExperienceLevel::Expert => 0.9,
    }
}

/// Person-months to move from one architecture to another.
pub fn migration_effort(from: ArchitectureStyle, to: ArchitectureStyle) -> u32 {
    use ArchitectureStyle::*;

    match (from, to) {
        (Monolith, Microservices) => 18,
        (Monolith, Serverless) => 12,
        (Monolith, Hybrid) => 15,
        (Microservices, Monolith) => 12,
        (Microservices, Serverless) => 24,
        (Microservices, Hybrid) => 8,
        (Serverless, Monolith) => 8,
        (Serverless, Microservices) => 20,
        (Serverless, Hybrid) => 10,
        (Hybrid, Monolith) => 6,
        (Hybrid, Microservices) => 10,
        (Hybrid, Serverless) => 12,
        _ => DEFAULT_MIGRATION_EFFORT,
    }
}
