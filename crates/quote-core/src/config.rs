//! Configuration types for quoting

use serde::{Deserialize, Serialize};

use crate::types::constants::BPS_PER_UNIT;
use crate::errors::{Error, Result};

/// What the slippage aggregator does with a path whose pool or asset is
/// missing from the snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPolicy {
    /// Drop the path and price the trade from the remaining ones
    #[default]
    SkipMissing,
    /// Fail the whole estimate
    Strict,
}

/// Quote configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Handling of paths that cannot be resolved
    #[serde(default)]
    pub path_policy: PathPolicy,

    /// Accepted slippage used to derive min-out / max-in limits (basis points)
    #[serde(default = "default_slippage_tolerance_bps")]
    pub slippage_tolerance_bps: u32,

    /// Estimates above this are flagged to the user (basis points)
    #[serde(default = "default_max_slippage_bps")]
    pub max_slippage_bps: u32,
}

fn default_slippage_tolerance_bps() -> u32 {
    50
}

fn default_max_slippage_bps() -> u32 {
    500
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            path_policy: PathPolicy::default(),
            slippage_tolerance_bps: default_slippage_tolerance_bps(),
            max_slippage_bps: default_max_slippage_bps(),
        }
    }
}

impl QuoteConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both basis-point settings stay below 100%
    pub fn validate(&self) -> Result<()> {
        if self.slippage_tolerance_bps >= BPS_PER_UNIT {
            return Err(Error::Config(format!(
                "slippage_tolerance_bps must be below {}, got {}",
                BPS_PER_UNIT, self.slippage_tolerance_bps
            )));
        }
        if self.max_slippage_bps >= BPS_PER_UNIT {
            return Err(Error::Config(format!(
                "max_slippage_bps must be below {}, got {}",
                BPS_PER_UNIT, self.max_slippage_bps
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuoteConfig::default();
        assert_eq!(config.path_policy, PathPolicy::SkipMissing);
        assert_eq!(config.slippage_tolerance_bps, 50);
        assert_eq!(config.max_slippage_bps, 500);
    }

    #[test]
    fn test_config_serialization() {
        let config = QuoteConfig {
            path_policy: PathPolicy::Strict,
            ..QuoteConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"strict\""));
        let parsed = QuoteConfig::from_json(&json).unwrap();
        assert_eq!(parsed.path_policy, PathPolicy::Strict);
        assert_eq!(parsed.slippage_tolerance_bps, config.slippage_tolerance_bps);
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let parsed = QuoteConfig::from_json(r#"{"slippage_tolerance_bps": 100}"#).unwrap();
        assert_eq!(parsed.slippage_tolerance_bps, 100);
        assert_eq!(parsed.path_policy, PathPolicy::SkipMissing);
        assert_eq!(parsed.max_slippage_bps, 500);
    }

    #[test]
    fn test_config_rejects_full_tolerance() {
        let err = QuoteConfig::from_json(r#"{"slippage_tolerance_bps": 10000}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = QuoteConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
