//! Calculator Adapters.
//!
//! Implementations of the PivotCalculator port.
//!
//! - `LocalCalculator` - In-process scoring engine
//! - `RemoteCalculator` - HTTP client for another deployment
//! - `FailoverCalculator` - Primary calculator with local fallback

mod failover;
mod local;
mod remote;

pub use failover::FailoverCalculator;
pub use local::LocalCalculator;
pub use remote::{RemoteCalculator, RemoteCalculatorConfig};
