//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `profile` - Team profile inputs and architecture styles
//! - `scoring` - Pure scoring services (TCS, ACI, Pivot Point, dealbreakers, ranking)
//! - `advisory` - Recommendations, migration roadmaps and business briefs

pub mod advisory;
pub mod profile;
pub mod scoring;
