//! Scoring engine.
//!
//! Pure domain services that turn a [`TeamProfile`](crate::domain::profile::TeamProfile)
//! into per-architecture fitness scores and a ranking.
//!
//! # Module Organization
//!
//! - `lookup_tables` - Canonical coefficient set
//! - `complexity_scorer` - Team Capability Score and Architecture Complexity Index
//! - `pivot_evaluator` - Pivot Point, risk tier and complexity tax
//! - `dealbreaker_detector` - Hard incompatibilities
//! - `architecture_ranker` - Viability gate, projections and referee scoring
//! - `engine` - Facade wiring the above together

mod architecture_ranker;
mod complexity_scorer;
mod dealbreaker_detector;
mod engine;
pub mod lookup_tables;
mod pivot_evaluator;

pub use architecture_ranker::{
    ArchitectureRanker, Projection, RankedArchitecture, RankingResult, ThreeYearTco, Viability,
    TIE_TOLERANCE,
};
pub use complexity_scorer::{ComplexityScorer, ScoreBreakdown};
pub use dealbreaker_detector::{
    Dealbreaker, DealbreakerDetector, MICROSERVICES_MIN_MONTHS, MICROSERVICES_MIN_TEAM,
};
pub use engine::{EngineOptions, ScoreResult, ScoringEngine};
pub use pivot_evaluator::{
    Persona, PivotEvaluation, PivotPointEvaluator, RiskTier, DISQUALIFY_THRESHOLD,
    VIABLE_THRESHOLD,
};
