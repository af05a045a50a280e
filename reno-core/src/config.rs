//! Estimator configuration.
//!
//! Only the validation thresholds are configurable. Coefficient tables and
//! tier rates are fixed business constants.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use reno_core::EstimatorConfig;
//!
//! let config = EstimatorConfig::default();
//!
//! assert_eq!(config.min_home_value, dec!(50000));
//! assert_eq!(config.min_yearly_income, dec!(8000));
//! assert!(config.validate().is_ok());
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest home value the estimator accepts, in USD.
pub const MIN_HOME_VALUE: Decimal = dec!(50000);

/// Smallest yearly income the estimator accepts, in USD.
pub const MIN_YEARLY_INCOME: Decimal = dec!(8000);

/// Errors raised by [`EstimatorConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum home value must be positive, got {0}")]
    InvalidMinHomeValue(Decimal),

    #[error("minimum yearly income must be positive, got {0}")]
    InvalidMinYearlyIncome(Decimal),
}

/// Thresholds applied by the validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorConfig {
    /// Home values below this are rejected.
    pub min_home_value: Decimal,

    /// Yearly incomes below this are rejected.
    ///
    /// Must stay positive: the monthly savings target is derived from income
    /// and is used as a divisor.
    pub min_yearly_income: Decimal,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_home_value: MIN_HOME_VALUE,
            min_yearly_income: MIN_YEARLY_INCOME,
        }
    }
}

impl EstimatorConfig {
    /// Checks that both thresholds are positive.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_home_value <= Decimal::ZERO {
            return Err(ConfigError::InvalidMinHomeValue(self.min_home_value));
        }
        if self.min_yearly_income <= Decimal::ZERO {
            return Err(ConfigError::InvalidMinYearlyIncome(self.min_yearly_income));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn validate_rejects_zero_min_home_value() {
        let config = EstimatorConfig {
            min_home_value: Decimal::ZERO,
            ..EstimatorConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMinHomeValue(Decimal::ZERO))
        );
    }

    #[test]
    fn validate_rejects_negative_min_yearly_income() {
        let config = EstimatorConfig {
            min_yearly_income: dec!(-1),
            ..EstimatorConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMinYearlyIncome(dec!(-1)))
        );
    }

    #[test]
    fn deserializes_partial_toml_with_defaults() {
        let config: EstimatorConfig = toml::from_str("min_home_value = 75000").unwrap();

        assert_eq!(config.min_home_value, dec!(75000));
        assert_eq!(config.min_yearly_income, MIN_YEARLY_INCOME);
    }

    #[test]
    fn deserialize_rejects_unknown_keys() {
        let result: Result<EstimatorConfig, _> = toml::from_str("max_home_value = 1");

        assert!(result.is_err());
    }
}
