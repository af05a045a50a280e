mod calculator_input;
mod project_type;
mod tier;
mod tier_result;

pub use calculator_input::{CalculatorForm, CalculatorInput};
pub use project_type::ProjectType;
pub use tier::Tier;
pub use tier_result::{BudgetEstimate, TierResult};
