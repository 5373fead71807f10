//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PivotCalculator` - Computes a calculation report, locally or remotely

mod pivot_calculator;

pub use pivot_calculator::{
    round2, CalculationBreakdown, CalculationReport, CalculationRequest, CalculatorError,
    PivotCalculator,
};
