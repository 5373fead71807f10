//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `calculator` - Pivot calculator implementations (local, remote, failover)
//! - `http` - axum REST API

pub mod calculator;
pub mod http;

pub use calculator::{FailoverCalculator, LocalCalculator, RemoteCalculator, RemoteCalculatorConfig};
pub use http::{build_app, MiddlewareSettings, ScoringAppState};
