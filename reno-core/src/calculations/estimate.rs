//! Three-tier budget estimate.
//!
//! [`BudgetEstimator`] is the entry point the front ends use: it runs the
//! validation gate and then computes low, middle and high tiers. Either all
//! three tiers come back or none do.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use reno_core::{BudgetEstimator, CalculatorForm};
//!
//! let estimator = BudgetEstimator::default();
//! let estimate = estimator
//!     .estimate(&CalculatorForm::new("600000", "85000", "Kitchen"))
//!     .unwrap();
//!
//! assert_eq!(estimate.low.total_budget, dec!(33000));
//! assert_eq!(estimate.high.roi_percent, dec!(120));
//! ```

use thiserror::Error;
use tracing::debug;

use super::{ComputationError, TierCalculator};
use crate::config::{ConfigError, EstimatorConfig};
use crate::models::{BudgetEstimate, CalculatorForm, CalculatorInput, Tier};
use crate::validation::{ValidationError, validate_with_config};

/// Why an estimate could not be produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("could not compute estimate: {0}")]
    Computation(#[from] ComputationError),
}

/// Validates form input and computes all three tiers.
#[derive(Debug, Clone, Default)]
pub struct BudgetEstimator {
    config: EstimatorConfig,
    calculator: TierCalculator,
}

impl BudgetEstimator {
    /// Creates an estimator with the given thresholds.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            calculator: TierCalculator::new(),
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Validates `form` and computes every tier.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Validation`] when the gate rejects the form,
    /// or [`EstimateError::Computation`] when any tier fails.
    pub fn estimate(
        &self,
        form: &CalculatorForm,
    ) -> Result<BudgetEstimate, EstimateError> {
        let input = validate_with_config(form, &self.config)?;
        Ok(self.estimate_input(input)?)
    }

    /// Computes every tier for input that already passed the gate.
    ///
    /// # Errors
    ///
    /// Returns the first [`ComputationError`] raised by any tier.
    pub fn estimate_input(
        &self,
        input: CalculatorInput,
    ) -> Result<BudgetEstimate, ComputationError> {
        let result = self.compute_tiers(&input);

        match &result {
            Ok(_) => debug!(project_type = %input.project_type(), "estimate computed"),
            Err(e) => debug!(error = %e, "estimate computation failed"),
        }
        result
    }

    fn compute_tiers(
        &self,
        input: &CalculatorInput,
    ) -> Result<BudgetEstimate, ComputationError> {
        Ok(BudgetEstimate {
            low: self.calculator.calculate(input, Tier::Low)?,
            middle: self.calculator.calculate(input, Tier::Middle)?,
            high: self.calculator.calculate(input, Tier::High)?,
            input: input.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::ProjectType;
    use crate::validation::ValidationFailure;

    fn form(
        home_value: &str,
        yearly_income: &str,
        project_type: &str,
    ) -> CalculatorForm {
        CalculatorForm::new(home_value, yearly_income, project_type)
    }

    #[test]
    fn estimate_returns_all_three_tiers_in_order() {
        let estimate = BudgetEstimator::default()
            .estimate(&form("600000", "85000", "Kitchen"))
            .unwrap();

        let tiers: Vec<Tier> = estimate.tiers().map(|t| t.tier).collect();
        assert_eq!(tiers, vec![Tier::Low, Tier::Middle, Tier::High]);
        assert_eq!(estimate.input.project_type(), ProjectType::Kitchen);
    }

    #[test]
    fn estimate_tier_lookup_matches_fields() {
        let estimate = BudgetEstimator::default()
            .estimate(&form("600000", "85000", "Kitchen"))
            .unwrap();

        assert_eq!(estimate.tier(Tier::Middle), &estimate.middle);
        assert_eq!(estimate.middle.initial_budget, dec!(60000));
        assert_eq!(estimate.middle.contingency_fund, dec!(9000));
        assert_eq!(estimate.middle.total_budget, dec!(69000));
        assert_eq!(estimate.middle.value_increase, dec!(69000));
    }

    #[test]
    fn estimate_rejects_invalid_form_without_computing() {
        let result = BudgetEstimator::default().estimate(&form("40000", "85000", "Kitchen"));

        match result {
            Err(EstimateError::Validation(error)) => {
                assert!(matches!(
                    error.failures(),
                    [ValidationFailure::HomeValueBelowMinimum { .. }]
                ));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn estimate_reports_overflow_as_computation_error() {
        let huge = Decimal::MAX.to_string();
        let result = BudgetEstimator::default().estimate(&form(&huge, "85000", "Kitchen"));

        assert_eq!(
            result,
            Err(EstimateError::Computation(ComputationError::Overflow))
        );
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = EstimatorConfig {
            min_home_value: Decimal::ZERO,
            ..EstimatorConfig::default()
        };

        assert!(BudgetEstimator::new(config).is_err());
    }

    #[test]
    fn new_applies_configured_thresholds() {
        let config = EstimatorConfig {
            min_home_value: dec!(250000),
            min_yearly_income: dec!(8000),
        };
        let estimator = BudgetEstimator::new(config).unwrap();

        assert!(estimator.estimate(&form("200000", "85000", "Kitchen")).is_err());
        assert!(estimator.estimate(&form("250000", "85000", "Kitchen")).is_ok());
    }
}
