//! Remote Calculator - PivotCalculator backed by another ArchitectIQ deployment.
//!
//! Posts the raw request to `{base_url}/calculate` and decodes the report.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RemoteCalculatorConfig::new("https://architectiq.example.com/api")
//!     .with_timeout(Duration::from_millis(1500));
//! let calculator = RemoteCalculator::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::ports::{CalculationReport, CalculationRequest, CalculatorError, PivotCalculator};

/// Configuration for the remote calculator.
#[derive(Debug, Clone)]
pub struct RemoteCalculatorConfig {
    /// Base URL the `/calculate` path is appended to.
    pub base_url: String,
    pub timeout: Duration,
}

impl RemoteCalculatorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(2000),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct RemoteCalculator {
    config: RemoteCalculatorConfig,
    client: Client,
}

impl RemoteCalculator {
    pub fn new(config: RemoteCalculatorConfig) -> Result<Self, CalculatorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CalculatorError::Network(format!("failed to build client: {e}")))?;

        Ok(Self { config, client })
    }

    fn calculate_url(&self) -> String {
        format!("{}/calculate", self.config.base_url.trim_end_matches('/'))
    }

    async fn send(&self, request: &CalculationRequest) -> Result<Response, CalculatorError> {
        self.client
            .post(self.calculate_url())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CalculatorError::Timeout {
                        timeout_ms: self.config.timeout.as_millis() as u64,
                    }
                } else if e.is_connect() {
                    CalculatorError::Network(format!("connection failed: {e}"))
                } else {
                    CalculatorError::Network(e.to_string())
                }
            })
    }
}

#[async_trait]
impl PivotCalculator for RemoteCalculator {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationReport, CalculatorError> {
        let response = self.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CalculatorError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<CalculationReport>()
            .await
            .map_err(|e| CalculatorError::Decode(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
