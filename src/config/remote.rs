//! Remote calculator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Remote calculator configuration.
///
/// With no `base_url` every calculation runs in-process.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Base URL of another deployment, e.g. `https://architectiq.example.com/api`
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl RemoteConfig {
    pub fn is_enabled(&self) -> bool {
        self.base_url.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidRemoteUrl);
            }
        }
        if !(1..=60_000).contains(&self.timeout_ms) {
            return Err(ValidationError::InvalidRemoteTimeout);
        }
        Ok(())
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_disabled_by_default() {
        let config = RemoteConfig::default();
        assert!(!config.is_enabled());
        assert_eq!(config.timeout(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_url_scheme_required() {
        let config = RemoteConfig {
            base_url: Some("architectiq.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRemoteUrl));
    }

    #[test]
    fn test_timeout_bounds() {
        for timeout_ms in [0, 60_001] {
            let config = RemoteConfig {
                base_url: Some("https://architectiq.example.com".to_string()),
                timeout_ms,
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidRemoteTimeout));
        }
    }
}
