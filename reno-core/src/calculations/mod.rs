//! Budget calculations for the renovation estimator.
//!
//! [`TierCalculator`] computes one tier; [`BudgetEstimator`] runs the
//! validation gate and then all three tiers together.

pub mod common;
pub mod estimate;
pub mod tier;

use thiserror::Error;

use crate::models::Tier;

pub use estimate::{BudgetEstimator, EstimateError};
pub use tier::{TierCalculator, calculate_tier};

/// Failures raised while computing a tier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComputationError {
    /// Monthly savings came out as zero, so time-to-save is undefined.
    /// Validated input never reaches this.
    #[error("monthly savings for the {0} tier is zero; time to save is undefined")]
    ZeroMonthlySavings(Tier),

    #[error("estimate exceeds the supported numeric range")]
    Overflow,
}
