use clap::ValueEnum;
use reno_core::{BudgetEstimate, EstimateTable, ProjectType};

/// How `estimate` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Renders the estimate table as aligned plain text.
///
/// The label column is left-aligned; tier columns are right-aligned so the
/// amounts line up on their decimal points.
pub fn render_table(table: &EstimateTable) -> String {
    let headers = EstimateTable::HEADERS;
    let label_width = table
        .rows
        .iter()
        .map(|r| r.label.len())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());
    let cell_width = table
        .rows
        .iter()
        .flat_map(|r| r.cells())
        .chain(headers[1..].iter().copied())
        .map(str::len)
        .max()
        .unwrap_or(0);

    let mut out = format!("Renovation budget estimate: {}\n\n", table.project_type);
    let rule_width = label_width + 3 * (cell_width + 3);

    out.push_str(&format!("{:<label_width$}", headers[0]));
    for header in &headers[1..] {
        out.push_str(&format!(" | {header:>cell_width$}"));
    }
    out.push('\n');
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for row in &table.rows {
        out.push_str(&format!("{:<label_width$}", row.label));
        for cell in row.cells() {
            out.push_str(&format!(" | {cell:>cell_width$}"));
        }
        out.push('\n');
    }
    out
}

/// Renders the raw estimate as pretty-printed JSON.
pub fn render_json(estimate: &BudgetEstimate) -> serde_json::Result<String> {
    serde_json::to_string_pretty(estimate)
}

/// Lists the project labels accepted by the form, one per line.
pub fn render_projects() -> String {
    ProjectType::ALL
        .iter()
        .map(|p| format!("{}\n", p.label()))
        .collect()
}
