//! Result table shown to the user after an estimate.
//!
//! Rows are the eight budget figures; columns are the three tiers. Cells are
//! already formatted for display.

use serde::Serialize;

use crate::format::{format_months, format_percent, format_usd};
use crate::models::{BudgetEstimate, Tier, TierResult};

/// One labelled row with a formatted cell per tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: &'static str,
    pub low: String,
    pub middle: String,
    pub high: String,
}

impl ReportRow {
    pub fn cells(&self) -> [&str; 3] {
        [self.low.as_str(), self.middle.as_str(), self.high.as_str()]
    }
}

/// The formatted estimate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateTable {
    pub project_type: &'static str,
    pub rows: Vec<ReportRow>,
}

type CellFormatter = fn(&TierResult) -> String;

const ROWS: [(&str, CellFormatter); 8] = [
    ("Initial Budget", |r: &TierResult| format_usd(r.initial_budget)),
    ("Contingency Fund", |r: &TierResult| format_usd(r.contingency_fund)),
    ("Time To Save", |r: &TierResult| format_months(r.time_to_save_months)),
    ("Monthly Savings", |r: &TierResult| format_usd(r.monthly_savings)),
    ("Estimated ROI", |r: &TierResult| format_percent(r.roi_percent)),
    ("Total Budget", |r: &TierResult| format_usd(r.total_budget)),
    ("Value Increase", |r: &TierResult| format_usd(r.value_increase)),
    ("Estimated Updated Home Value", |r: &TierResult| format_usd(r.updated_home_value)),
];

impl EstimateTable {
    /// Column headers, starting with the empty row-label column.
    pub const HEADERS: [&'static str; 4] = ["", "Low", "Middle", "High"];

    pub fn from_estimate(estimate: &BudgetEstimate) -> Self {
        let rows = ROWS
            .iter()
            .map(|&(label, cell)| ReportRow {
                label,
                low: cell(estimate.tier(Tier::Low)),
                middle: cell(estimate.tier(Tier::Middle)),
                high: cell(estimate.tier(Tier::High)),
            })
            .collect();

        Self {
            project_type: estimate.input.project_type().label(),
            rows,
        }
    }

    pub fn row(
        &self,
        label: &str,
    ) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}
