//! Failover Calculator - tries a primary calculator, falls back to local.
//!
//! Any primary failure (transport, timeout, bad status, undecodable body) is
//! logged and answered from the in-process engine, so callers always get a
//! report.
//!
//! # Example
//!
//! ```ignore
//! let remote = RemoteCalculator::new(RemoteCalculatorConfig::new(url))?;
//! let calculator = FailoverCalculator::new(remote, LocalCalculator::new(engine));
//! ```

use async_trait::async_trait;

use crate::ports::{CalculationReport, CalculationRequest, CalculatorError, PivotCalculator};

use super::LocalCalculator;

pub struct FailoverCalculator<P: PivotCalculator> {
    primary: P,
    fallback: LocalCalculator,
}

impl<P: PivotCalculator> FailoverCalculator<P> {
    pub fn new(primary: P, fallback: LocalCalculator) -> Self {
        Self { primary, fallback }
    }

    /// Calculates and returns the name of the calculator that answered.
    pub async fn calculate_with_source(
        &self,
        request: &CalculationRequest,
    ) -> (CalculationReport, &'static str) {
        match self.primary.calculate(request).await {
            Ok(report) => (report, self.primary.name()),
            Err(err) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    error = %err,
                    "primary calculator failed, falling back to local computation"
                );
                (self.fallback.report(request), self.fallback.name())
            }
        }
    }
}

#[async_trait]
impl<P: PivotCalculator> PivotCalculator for FailoverCalculator<P> {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationReport, CalculatorError> {
        let (report, _) = self.calculate_with_source(request).await;
        Ok(report)
    }

    fn name(&self) -> &'static str {
        "failover"
    }
}
