use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

///
/// ToleranceConfig
///
/// Bounds on the planning search space and runtime:
/// - `max_context_size` (mS): how many domains a single context may fix
/// - `max_numerical_width` (mW): ratio width cap for numeric ranges
/// - `max_categorical_size` (mC): value-set cap for categorical domains
/// - `timeout_seconds`: deadline enforced by the planning manager
/// - `epsilon`: density-threshold step multiplier for the FANTOM planner
///
/// Validated eagerly; planners never see an invalid config.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToleranceConfig {
    pub max_context_size: usize,
    pub max_numerical_width: f64,
    pub max_categorical_size: usize,
    pub timeout_seconds: u64,
    pub epsilon: f64,
}

impl ToleranceConfig {
    pub const DEFAULT_MAX_CONTEXT_SIZE: usize = 3;
    pub const DEFAULT_MAX_NUMERICAL_WIDTH: f64 = 10.0;
    pub const DEFAULT_MAX_CATEGORICAL_SIZE: usize = 4;
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    pub const DEFAULT_EPSILON: f64 = 0.1;

    /// Build a validated config.
    pub fn new(
        max_context_size: usize,
        max_numerical_width: f64,
        max_categorical_size: usize,
        timeout_seconds: u64,
        epsilon: f64,
    ) -> Result<Self, ConfigError> {
        if max_numerical_width.is_nan() || max_numerical_width < 0.0 {
            return Err(ConfigError::InvalidWidth {
                value: max_numerical_width,
            });
        }
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon { value: epsilon });
        }
        if timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            max_context_size,
            max_numerical_width,
            max_categorical_size,
            timeout_seconds,
            epsilon,
        })
    }

    /// Manager deadline as a duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            max_context_size: Self::DEFAULT_MAX_CONTEXT_SIZE,
            max_numerical_width: Self::DEFAULT_MAX_NUMERICAL_WIDTH,
            max_categorical_size: Self::DEFAULT_MAX_CATEGORICAL_SIZE,
            timeout_seconds: Self::DEFAULT_TIMEOUT_SECONDS,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let d = ToleranceConfig::default();
        let rebuilt = ToleranceConfig::new(
            d.max_context_size,
            d.max_numerical_width,
            d.max_categorical_size,
            d.timeout_seconds,
            d.epsilon,
        );
        assert_eq!(rebuilt, Ok(d));
    }

    #[test]
    fn rejects_negative_width() {
        let err = ToleranceConfig::new(2, -1.0, 2, 10, 0.1).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWidth { .. }));
    }

    #[test]
    fn rejects_bad_epsilon() {
        assert!(matches!(
            ToleranceConfig::new(2, 2.0, 2, 10, 0.0),
            Err(ConfigError::InvalidEpsilon { .. })
        ));
        assert!(matches!(
            ToleranceConfig::new(2, 2.0, 2, 10, f64::NAN),
            Err(ConfigError::InvalidEpsilon { .. })
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        assert_eq!(
            ToleranceConfig::new(2, 2.0, 2, 0, 0.1),
            Err(ConfigError::ZeroTimeout)
        );
    }

    #[test]
    fn serde_round_trip() {
        let config = ToleranceConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ToleranceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn serde_rejects_negative_size() {
        let json = r#"{
            "max_context_size": -1,
            "max_numerical_width": 2.0,
            "max_categorical_size": 2,
            "timeout_seconds": 10,
            "epsilon": 0.1
        }"#;
        assert!(serde_json::from_str::<ToleranceConfig>(json).is_err());
    }
}
