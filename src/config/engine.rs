//! Scoring engine configuration

use serde::Deserialize;

use crate::domain::scoring::EngineOptions;

/// Scoring engine configuration
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Apply the scale's Context Normalization Factor to every Pivot Point
    #[serde(default)]
    pub context_normalization: bool,
}

impl EngineConfig {
    pub fn options(&self) -> EngineOptions {
        EngineOptions {
            context_normalization: self.context_normalization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_off_by_default() {
        assert!(!EngineConfig::default().options().context_normalization);
    }

    #[test]
    fn test_engine_config_deserialization() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"context_normalization": true}"#).unwrap();
        assert!(config.options().context_normalization);
    }
}
