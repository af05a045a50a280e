use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProjectType;

/// Raw estimator form as submitted: every field is still text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorForm {
    pub home_value: String,
    pub yearly_income: String,
    pub project_type: String,
}

impl CalculatorForm {
    pub fn new(
        home_value: impl Into<String>,
        yearly_income: impl Into<String>,
        project_type: impl Into<String>,
    ) -> Self {
        Self {
            home_value: home_value.into(),
            yearly_income: yearly_income.into(),
            project_type: project_type.into(),
        }
    }
}

/// Estimator input that has passed the validation gate.
///
/// Only [`crate::validation`] can build one, so holding a `CalculatorInput`
/// means the minimum thresholds have been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorInput {
    home_value: Decimal,
    yearly_income: Decimal,
    project_type: ProjectType,
}

impl CalculatorInput {
    pub(crate) fn new(
        home_value: Decimal,
        yearly_income: Decimal,
        project_type: ProjectType,
    ) -> Self {
        Self {
            home_value,
            yearly_income,
            project_type,
        }
    }

    pub fn home_value(&self) -> Decimal {
        self.home_value
    }

    pub fn yearly_income(&self) -> Decimal {
        self.yearly_income
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }
}
