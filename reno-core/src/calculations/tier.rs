//! Per-tier budget calculation.
//!
//! Each tier is computed independently from the same inputs; only the
//! coefficients and rates differ.
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | Project cost coefficient from the cost table |
//! | 2 | Initial budget: home value × project coefficient |
//! | 3 | Contingency fund: initial budget × tier contingency rate |
//! | 4 | Monthly savings: (yearly income ÷ 12) × tier savings rate |
//! | 5 | Total budget: initial budget + contingency fund |
//! | 6 | Time to save: total budget ÷ monthly savings |
//! | 7 | ROI coefficient from the ROI table |
//! | 8 | Value increase: total budget × ROI coefficient; ROI % = coefficient × 100 |
//! | 9 | Updated home value: home value + value increase |
//!
//! Nothing is rounded here. Formatting rounds at display time.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use reno_core::calculations::TierCalculator;
//! use reno_core::{CalculatorForm, Tier, validate};
//!
//! let input = validate(&CalculatorForm::new("600000", "85000", "Kitchen")).unwrap();
//! let result = TierCalculator::new().calculate(&input, Tier::Low).unwrap();
//!
//! assert_eq!(result.initial_budget, dec!(30000));
//! assert_eq!(result.contingency_fund, dec!(3000));
//! assert_eq!(result.total_budget, dec!(33000));
//! assert_eq!(result.roi_percent, dec!(90));
//! assert_eq!(result.value_increase, dec!(29700));
//! assert_eq!(result.updated_home_value, dec!(629700));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::ComputationError;
use super::common::{add, div, mul};
use crate::coefficients::CoefficientTable;
use crate::models::{CalculatorInput, ProjectType, Tier, TierResult};

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Computes a single budget tier from the coefficient tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierCalculator {
    coefficients: CoefficientTable,
}

impl TierCalculator {
    /// Creates a calculator over the standard coefficient tables.
    pub fn new() -> Self {
        Self::with_coefficients(CoefficientTable::standard())
    }

    pub fn with_coefficients(coefficients: CoefficientTable) -> Self {
        Self { coefficients }
    }

    /// Calculates `tier` for validated input.
    ///
    /// # Errors
    ///
    /// Returns [`ComputationError::Overflow`] if any intermediate value leaves
    /// the decimal range.
    pub fn calculate(
        &self,
        input: &CalculatorInput,
        tier: Tier,
    ) -> Result<TierResult, ComputationError> {
        self.calculate_amounts(
            input.home_value(),
            input.yearly_income(),
            input.project_type(),
            tier,
        )
    }

    /// Calculates `tier` from raw amounts without going through the gate.
    ///
    /// # Errors
    ///
    /// Returns [`ComputationError::ZeroMonthlySavings`] when the yearly income
    /// yields no savings, or [`ComputationError::Overflow`] if any
    /// intermediate value leaves the decimal range.
    pub fn calculate_amounts(
        &self,
        home_value: Decimal,
        yearly_income: Decimal,
        project_type: ProjectType,
        tier: Tier,
    ) -> Result<TierResult, ComputationError> {
        let project_coefficient = self.coefficients.project_cost(tier, project_type);
        let initial_budget = self.initial_budget(home_value, project_coefficient)?;
        let contingency_fund = self.contingency_fund(initial_budget, tier)?;
        let monthly_savings = self.monthly_savings(yearly_income, tier)?;
        let total_budget = add(initial_budget, contingency_fund)?;
        let time_to_save_months = self.time_to_save(total_budget, monthly_savings, tier)?;

        let roi_coefficient = self.coefficients.roi(tier, project_type);
        let value_increase = mul(total_budget, roi_coefficient)?;
        let roi_percent = mul(roi_coefficient, PERCENT)?;
        let updated_home_value = add(home_value, value_increase)?;

        debug!(
            %tier,
            %project_type,
            %total_budget,
            %time_to_save_months,
            "tier calculated"
        );

        Ok(TierResult {
            tier,
            project_type,
            initial_budget,
            contingency_fund,
            time_to_save_months,
            monthly_savings,
            roi_percent,
            total_budget,
            value_increase,
            updated_home_value,
        })
    }

    /// Share of home value spent on the project.
    fn initial_budget(
        &self,
        home_value: Decimal,
        project_coefficient: Decimal,
    ) -> Result<Decimal, ComputationError> {
        mul(home_value, project_coefficient)
    }

    fn contingency_fund(
        &self,
        initial_budget: Decimal,
        tier: Tier,
    ) -> Result<Decimal, ComputationError> {
        mul(initial_budget, tier.contingency_rate())
    }

    /// Monthly income times the tier savings rate.
    fn monthly_savings(
        &self,
        yearly_income: Decimal,
        tier: Tier,
    ) -> Result<Decimal, ComputationError> {
        let monthly_income = div(yearly_income, MONTHS_PER_YEAR)?;
        mul(monthly_income, tier.savings_rate())
    }

    fn time_to_save(
        &self,
        total_budget: Decimal,
        monthly_savings: Decimal,
        tier: Tier,
    ) -> Result<Decimal, ComputationError> {
        if monthly_savings.is_zero() {
            return Err(ComputationError::ZeroMonthlySavings(tier));
        }
        div(total_budget, monthly_savings)
    }
}

/// Calculates one tier from raw amounts using the standard tables.
///
/// Callers should normally validate first; see [`crate::validate`].
///
/// # Errors
///
/// See [`TierCalculator::calculate_amounts`].
pub fn calculate_tier(
    home_value: Decimal,
    yearly_income: Decimal,
    project_type: ProjectType,
    tier: Tier,
) -> Result<TierResult, ComputationError> {
    TierCalculator::new().calculate_amounts(home_value, yearly_income, project_type, tier)
}
