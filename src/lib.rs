//! ArchitectIQ - Architecture fitness scoring
//!
//! This crate scores a team profile against four architecture styles using the
//! Pivot Point (team capability over architectural complexity), classifies the
//! result into risk tiers, ranks the styles and composes recommendations,
//! migration roadmaps and business briefs. An axum server exposes it over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
