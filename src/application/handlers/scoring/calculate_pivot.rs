//! CalculatePivotHandler - Query handler for a single Pivot Point calculation.

use std::sync::Arc;

use crate::ports::{CalculationReport, CalculationRequest, CalculatorError, PivotCalculator};

/// Query to score one architecture for one raw profile.
#[derive(Debug, Clone, Default)]
pub struct CalculatePivotQuery {
    pub request: CalculationRequest,
}

pub type CalculatePivotResult = CalculationReport;

/// Delegates to whichever calculator the server was wired with.
pub struct CalculatePivotHandler {
    calculator: Arc<dyn PivotCalculator>,
}

impl CalculatePivotHandler {
    pub fn new(calculator: Arc<dyn PivotCalculator>) -> Self {
        Self { calculator }
    }

    pub async fn handle(
        &self,
        query: CalculatePivotQuery,
    ) -> Result<CalculatePivotResult, CalculatorError> {
        let report = self.calculator.calculate(&query.request).await?;

        tracing::debug!(
            calculator = self.calculator.name(),
            pivot_point = report.pivot_point,
            risk_level = report.risk_level.label(),
            "pivot point calculated"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::calculator::LocalCalculator;
    use crate::domain::profile::RawInput;
    use crate::domain::scoring::RiskTier;
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct FailingCalculator;

    #[async_trait]
    impl PivotCalculator for FailingCalculator {
        async fn calculate(
            &self,
            _request: &CalculationRequest,
        ) -> Result<CalculationReport, CalculatorError> {
            Err(CalculatorError::Status { status: 503 })
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn returns_local_report() {
        let handler = CalculatePivotHandler::new(Arc::new(LocalCalculator::default()));
        let query = CalculatePivotQuery {
            request: CalculationRequest {
                architecture: Some(RawInput::from("serverless")),
                ..Default::default()
            },
        };

        let report = handler.handle(query).await.unwrap();
        assert_eq!(report.pivot_point, 0.05);
        assert_eq!(report.risk_level, RiskTier::Critical);
    }

    #[tokio::test]
    async fn propagates_calculator_errors() {
        let handler = CalculatePivotHandler::new(Arc::new(FailingCalculator));
        let result = handler.handle(CalculatePivotQuery::default()).await;
        assert_eq!(result.unwrap_err(), CalculatorError::Status { status: 503 });
    }
}
