//! Renovation budget estimator.
//!
//! Turns a home value, a yearly income and a project type into three budget
//! tiers. Input goes through [`validate`] first; [`BudgetEstimator`] wraps
//! the gate and the per-tier calculation.

pub mod calculations;
pub mod coefficients;
pub mod config;
pub mod format;
pub mod models;
pub mod report;
pub mod validation;

pub use calculations::{
    BudgetEstimator, ComputationError, EstimateError, TierCalculator, calculate_tier,
};
pub use coefficients::CoefficientTable;
pub use config::{ConfigError, EstimatorConfig};
pub use models::*;
pub use report::{EstimateTable, ReportRow};
pub use validation::{ValidationError, ValidationFailure, validate, validate_with_config};
