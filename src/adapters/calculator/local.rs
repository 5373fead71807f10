//! Local Calculator - in-process implementation of the PivotCalculator port.

use async_trait::async_trait;

use crate::domain::scoring::{ComplexityScorer, ScoringEngine};
use crate::ports::{CalculationReport, CalculationRequest, CalculatorError, PivotCalculator};

/// Computes reports with the scoring engine. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalculator {
    engine: ScoringEngine,
}

impl LocalCalculator {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// Synchronous form used by the async port and by the failover path.
    pub fn report(&self, request: &CalculationRequest) -> CalculationReport {
        let profile = request.profile();
        let architecture = request.architecture();
        let score = self.engine.evaluate(&profile, architecture);
        let breakdown = ComplexityScorer::breakdown(&profile, architecture);
        CalculationReport::from_score(&score, &breakdown)
    }
}

#[async_trait]
impl PivotCalculator for LocalCalculator {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationReport, CalculatorError> {
        Ok(self.report(request))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
