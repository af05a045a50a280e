//! Project cost and ROI coefficient tables.
//!
//! Both tables are keyed by `(Tier, ProjectType)`:
//!
//! | Project | Cost low | Cost mid | Cost high | ROI low | ROI mid | ROI high |
//! |---------|----------|----------|-----------|---------|---------|----------|
//! | Bathroom | 0.02 | 0.04 | 0.07 | 0.65 | 0.70 | 0.75 |
//! | Kitchen | 0.05 | 0.10 | 0.15 | 0.90 | 1.00 | 1.20 |
//! | Roof Replacement | 0.03 | 0.05 | 0.08 | 0.60 | 0.65 | 0.70 |
//! | Window Replacement | 0.02 | 0.035 | 0.05 | 0.65 | 0.70 | 0.75 |
//! | Garage Door Replacement | 0.005 | 0.01 | 0.02 | 0.95 | 1.00 | 1.05 |
//! | Deck Addition | 0.02 | 0.04 | 0.06 | 0.60 | 0.65 | 0.70 |
//! | Attic Insulation | 0.005 | 0.01 | 0.015 | 1.00 | 1.05 | 1.10 |
//! | Siding Replacement | 0.03 | 0.05 | 0.08 | 0.75 | 0.80 | 0.85 |
//! | Room Addition | 0.08 | 0.12 | 0.20 | 0.55 | 0.60 | 0.65 |
//! | Accessory Dwelling Unit | 0.15 | 0.25 | 0.35 | 0.80 | 0.90 | 1.00 |
//! | ADU | 0.15 | 0.25 | 0.35 | 0.80 | 0.90 | 1.00 |
//! | Landscaping | 0.01 | 0.03 | 0.05 | 0.50 | 0.60 | 0.70 |
//! | Solar Panel Installation | 0.03 | 0.05 | 0.07 | 0.60 | 0.65 | 0.70 |
//!
//! The cost coefficient is the fraction of home value assumed to be spent on
//! the project. The ROI coefficient is how much of the total budget comes back
//! as added home value.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use reno_core::{CoefficientTable, ProjectType, Tier};
//!
//! let table = CoefficientTable::standard();
//!
//! assert_eq!(table.project_cost(Tier::Low, ProjectType::Kitchen), dec!(0.05));
//! assert_eq!(table.roi(Tier::High, ProjectType::Kitchen), dec!(1.20));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{ProjectType, Tier};

type TierRow = [Decimal; 13];

// Columns follow ProjectType::ALL.
const PROJECT_COST: [TierRow; 3] = [
    // Low
    [
        dec!(0.02),
        dec!(0.05),
        dec!(0.03),
        dec!(0.02),
        dec!(0.005),
        dec!(0.02),
        dec!(0.005),
        dec!(0.03),
        dec!(0.08),
        dec!(0.15),
        dec!(0.15),
        dec!(0.01),
        dec!(0.03),
    ],
    // Middle
    [
        dec!(0.04),
        dec!(0.10),
        dec!(0.05),
        dec!(0.035),
        dec!(0.01),
        dec!(0.04),
        dec!(0.01),
        dec!(0.05),
        dec!(0.12),
        dec!(0.25),
        dec!(0.25),
        dec!(0.03),
        dec!(0.05),
    ],
    // High
    [
        dec!(0.07),
        dec!(0.15),
        dec!(0.08),
        dec!(0.05),
        dec!(0.02),
        dec!(0.06),
        dec!(0.015),
        dec!(0.08),
        dec!(0.20),
        dec!(0.35),
        dec!(0.35),
        dec!(0.05),
        dec!(0.07),
    ],
];

const ROI: [TierRow; 3] = [
    // Low
    [
        dec!(0.65),
        dec!(0.90),
        dec!(0.60),
        dec!(0.65),
        dec!(0.95),
        dec!(0.60),
        dec!(1.00),
        dec!(0.75),
        dec!(0.55),
        dec!(0.80),
        dec!(0.80),
        dec!(0.50),
        dec!(0.60),
    ],
    // Middle
    [
        dec!(0.70),
        dec!(1.00),
        dec!(0.65),
        dec!(0.70),
        dec!(1.00),
        dec!(0.65),
        dec!(1.05),
        dec!(0.80),
        dec!(0.60),
        dec!(0.90),
        dec!(0.90),
        dec!(0.60),
        dec!(0.65),
    ],
    // High
    [
        dec!(0.75),
        dec!(1.20),
        dec!(0.70),
        dec!(0.75),
        dec!(1.05),
        dec!(0.70),
        dec!(1.10),
        dec!(0.85),
        dec!(0.65),
        dec!(1.00),
        dec!(1.00),
        dec!(0.70),
        dec!(0.70),
    ],
];

/// Read-only view over the project cost and ROI tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoefficientTable {
    project_cost: &'static [TierRow; 3],
    roi: &'static [TierRow; 3],
}

impl CoefficientTable {
    /// The business's published coefficient tables.
    pub const fn standard() -> Self {
        Self {
            project_cost: &PROJECT_COST,
            roi: &ROI,
        }
    }

    /// Fraction of home value budgeted for `project` at `tier`.
    pub fn project_cost(
        &self,
        tier: Tier,
        project: ProjectType,
    ) -> Decimal {
        self.project_cost[tier.index()][project.index()]
    }

    /// Multiplier converting total budget into added home value.
    pub fn roi(
        &self,
        tier: Tier,
        project: ProjectType,
    ) -> Decimal {
        self.roi[tier.index()][project.index()]
    }
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self::standard()
    }
}
