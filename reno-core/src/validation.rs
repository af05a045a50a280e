//! Input validation gate.
//!
//! Every estimate passes through [`validate`] first. The gate checks all
//! three form fields and reports every failing check at once, so the caller
//! can show a single combined message.
//!
//! # Example
//!
//! ```
//! use reno_core::{CalculatorForm, ProjectType, validate};
//!
//! let form = CalculatorForm::new("$600,000", "85000", "Kitchen");
//! let input = validate(&form).unwrap();
//! assert_eq!(input.project_type(), ProjectType::Kitchen);
//!
//! let form = CalculatorForm::new("40000", "5000", "");
//! let error = validate(&form).unwrap_err();
//! assert_eq!(error.failures().len(), 3);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::debug;

use crate::config::EstimatorConfig;
use crate::format::format_usd;
use crate::models::{CalculatorForm, CalculatorInput, ProjectType};

// The pattern is a literal, so compiling it cannot fail at runtime.
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>-)?\$?(?P<digits>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?|\.\d+)$")
        .expect("amount pattern is a valid regex")
});

/// Why a money field could not be read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("no amount entered")]
    Empty,

    #[error("'{0}' is not a dollar amount")]
    Malformed(String),

    #[error("'{0}' is too large")]
    OutOfRange(String),

    #[error("'{0}' has more decimal places than can be stored exactly")]
    TooPrecise(String),
}

/// Parses a dollar amount typed into the form.
///
/// Accepts an optional leading `-` and `$`, comma thousands separators and
/// surrounding whitespace: `"$600,000.00"`, `" 85000 "`, `"-1,250"`.
///
/// Amounts are never rounded on the way in: text with more significant
/// digits than a [`Decimal`] holds is rejected as [`ParseAmountError::TooPrecise`].
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let caps = AMOUNT_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ParseAmountError::Malformed(trimmed.to_string()))?;

    let mut normalized = caps["digits"].replace(',', "");
    if caps.name("sign").is_some() {
        normalized.insert(0, '-');
    }

    Decimal::from_str_exact(&normalized).map_err(|e| match e {
        rust_decimal::Error::Underflow => ParseAmountError::TooPrecise(trimmed.to_string()),
        _ => ParseAmountError::OutOfRange(trimmed.to_string()),
    })
}

/// A single failed check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("home value: {0}")]
    UnreadableHomeValue(ParseAmountError),

    #[error("home value must be at least {} (got {})", usd(.minimum), usd_toward_zero(.value))]
    HomeValueBelowMinimum { value: Decimal, minimum: Decimal },

    #[error("yearly income: {0}")]
    UnreadableYearlyIncome(ParseAmountError),

    #[error("yearly income must be at least {} (got {})", usd(.minimum), usd_toward_zero(.value))]
    YearlyIncomeBelowMinimum { value: Decimal, minimum: Decimal },

    #[error("project type is required")]
    MissingProjectType,

    #[error("'{0}' is not a recognised project type")]
    UnknownProjectType(String),
}

/// Every check the form failed, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    failures: Vec<ValidationFailure>,
}

impl ValidationError {
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str("please correct the following: ")?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Validates a form against the default thresholds.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every failed check.
pub fn validate(form: &CalculatorForm) -> Result<CalculatorInput, ValidationError> {
    validate_with_config(form, &EstimatorConfig::default())
}

/// Validates a form against the thresholds in `config`.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every failed check.
pub fn validate_with_config(
    form: &CalculatorForm,
    config: &EstimatorConfig,
) -> Result<CalculatorInput, ValidationError> {
    let home_value = parse_amount(&form.home_value)
        .map_err(ValidationFailure::UnreadableHomeValue)
        .and_then(|value| check_home_value(value, config));
    let yearly_income = parse_amount(&form.yearly_income)
        .map_err(ValidationFailure::UnreadableYearlyIncome)
        .and_then(|value| check_yearly_income(value, config));

    combine(home_value, yearly_income, check_project_type(&form.project_type))
}

/// Validates amounts that are already numeric.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every failed check.
pub fn validate_amounts(
    home_value: Decimal,
    yearly_income: Decimal,
    project_type: &str,
    config: &EstimatorConfig,
) -> Result<CalculatorInput, ValidationError> {
    combine(
        check_home_value(home_value, config),
        check_yearly_income(yearly_income, config),
        check_project_type(project_type),
    )
}

fn combine(
    home_value: Result<Decimal, ValidationFailure>,
    yearly_income: Result<Decimal, ValidationFailure>,
    project_type: Result<ProjectType, ValidationFailure>,
) -> Result<CalculatorInput, ValidationError> {
    let mut failures = Vec::new();

    let home_value = home_value.map_err(|f| failures.push(f)).ok();
    let yearly_income = yearly_income.map_err(|f| failures.push(f)).ok();
    let project_type = project_type.map_err(|f| failures.push(f)).ok();

    match (home_value, yearly_income, project_type) {
        (Some(home_value), Some(yearly_income), Some(project_type)) => {
            Ok(CalculatorInput::new(home_value, yearly_income, project_type))
        }
        _ => {
            let error = ValidationError { failures };
            debug!(%error, "estimator input rejected");
            Err(error)
        }
    }
}

fn usd(value: &Decimal) -> String {
    format_usd(*value)
}

/// Cuts to whole cents before formatting so a rejected amount never displays
/// as the minimum it fell short of.
fn usd_toward_zero(value: &Decimal) -> String {
    format_usd(value.round_dp_with_strategy(2, RoundingStrategy::ToZero))
}

fn check_home_value(
    value: Decimal,
    config: &EstimatorConfig,
) -> Result<Decimal, ValidationFailure> {
    if value < config.min_home_value {
        return Err(ValidationFailure::HomeValueBelowMinimum {
            value,
            minimum: config.min_home_value,
        });
    }
    Ok(value)
}

fn check_yearly_income(
    value: Decimal,
    config: &EstimatorConfig,
) -> Result<Decimal, ValidationFailure> {
    if value < config.min_yearly_income {
        return Err(ValidationFailure::YearlyIncomeBelowMinimum {
            value,
            minimum: config.min_yearly_income,
        });
    }
    Ok(value)
}

fn check_project_type(label: &str) -> Result<ProjectType, ValidationFailure> {
    if label.trim().is_empty() {
        return Err(ValidationFailure::MissingProjectType);
    }
    ProjectType::parse(label)
        .ok_or_else(|| ValidationFailure::UnknownProjectType(label.trim().to_string()))
}
