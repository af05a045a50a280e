use rust_decimal::Decimal;
use serde::Serialize;

use super::{CalculatorInput, ProjectType, Tier};

/// Budget figures for a single tier.
///
/// Values are unrounded; rounding happens only when they are formatted for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierResult {
    pub tier: Tier,
    pub project_type: ProjectType,
    pub initial_budget: Decimal,
    pub contingency_fund: Decimal,
    pub time_to_save_months: Decimal,
    pub monthly_savings: Decimal,
    pub roi_percent: Decimal,
    pub total_budget: Decimal,
    pub value_increase: Decimal,
    pub updated_home_value: Decimal,
}

/// All three tiers for one validated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetEstimate {
    pub input: CalculatorInput,
    pub low: TierResult,
    pub middle: TierResult,
    pub high: TierResult,
}

impl BudgetEstimate {
    pub fn tier(
        &self,
        tier: Tier,
    ) -> &TierResult {
        match tier {
            Tier::Low => &self.low,
            Tier::Middle => &self.middle,
            Tier::High => &self.high,
        }
    }

    /// Tier results in low, middle, high order.
    pub fn tiers(&self) -> impl Iterator<Item = &TierResult> {
        [&self.low, &self.middle, &self.high].into_iter()
    }
}
