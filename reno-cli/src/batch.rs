//! Batch estimation over CSV files.
//!
//! ## Input format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around values is trimmed. A row that cannot be read (wrong number of
//! fields, bad quoting) is rejected on its own; the rest of the file is still
//! estimated. Amount cells accept the same text as the form
//! (`$600,000`, `85000.00`).
//!
//! | Column | Type | Notes |
//! |-----------------|--------|----------------------------------------|
//! | `home_value` | amount | at least 50,000 by default |
//! | `yearly_income` | amount | at least 8,000 by default |
//! | `project_type` | string | one of the 13 project labels |
//!
//! ```csv
//! home_value,yearly_income,project_type
//! 600000,85000,Kitchen
//! "$350,000",62000,ADU
//! ```
//!
//! ## Output format
//!
//! One line per tier for every accepted row, amounts rounded to cents and
//! time to save rounded to whole months:
//!
//! ```csv
//! row,project_type,tier,initial_budget,contingency_fund,time_to_save_months,monthly_savings,roi_percent,total_budget,value_increase,updated_home_value
//! 1,Kitchen,low,30000.00,3000.00,23,1416.67,90,33000.00,29700.00,629700.00
//! ```

use std::io::{Read, Write};
use std::path::Path;

use reno_core::calculations::common::{round_half_up, round_whole};
use reno_core::{BudgetEstimate, BudgetEstimator, CalculatorForm, EstimateError, Tier};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 3] = ["home_value", "yearly_income", "project_type"];

/// Errors that stop a batch before any row is estimated.
#[derive(Debug, Error)]
pub enum BatchLoadError {
    /// The header line or the underlying reader failed.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single row produced no estimate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("unreadable row: {0}")]
    Unreadable(String),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// One data row as read from the file.
pub type LoadedRow = Result<CalculatorForm, RowError>;

/// A row that produced no estimate, with its 1-based data row number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub row: usize,
    pub error: RowError,
}

/// An accepted row and its estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatedRow {
    pub row: usize,
    pub estimate: BudgetEstimate,
}

/// Outcome of estimating every row of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub estimated: Vec<EstimatedRow>,
    pub rejected: Vec<RejectedRow>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    row: usize,
    project_type: &'static str,
    tier: Tier,
    initial_budget: Decimal,
    contingency_fund: Decimal,
    time_to_save_months: Decimal,
    monthly_savings: Decimal,
    roi_percent: Decimal,
    total_budget: Decimal,
    value_increase: Decimal,
    updated_home_value: Decimal,
}

/// Reads forms from CSV. Rows are returned in file order, one entry per data
/// row; rows that cannot be read come back as [`RowError::Unreadable`].
///
/// # Errors
///
/// [`BatchLoadError::MissingColumn`] if a required header is absent, and
/// [`BatchLoadError::Parse`] if the header line or the reader itself fails.
pub fn load_forms<R: Read>(reader: R) -> Result<Vec<LoadedRow>, BatchLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(BatchLoadError::MissingColumn(missing));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                rows.push(Err(RowError::Unreadable(e.to_string())));
                continue;
            }
        };

        if record.len() != headers.len() {
            rows.push(Err(RowError::Unreadable(format!(
                "expected {} fields, found {}",
                headers.len(),
                record.len()
            ))));
            continue;
        }

        rows.push(
            record
                .deserialize::<CalculatorForm>(Some(&headers))
                .map_err(|e| RowError::Unreadable(e.to_string())),
        );
    }
    Ok(rows)
}

/// Convenience wrapper: read a file from disk and delegate to [`load_forms`].
pub fn load_forms_from_file(path: &Path) -> Result<Vec<LoadedRow>, BatchLoadError> {
    let file = std::fs::File::open(path).map_err(|source| BatchLoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_forms(file)
}

/// Estimates every readable row, keeping going past rejected ones.
pub fn estimate_all(
    estimator: &BudgetEstimator,
    rows: &[LoadedRow],
) -> BatchReport {
    let mut report = BatchReport::default();

    for (idx, loaded) in rows.iter().enumerate() {
        let row = idx + 1;
        let outcome = loaded
            .clone()
            .and_then(|form| estimator.estimate(&form).map_err(RowError::from));
        match outcome {
            Ok(estimate) => report.estimated.push(EstimatedRow { row, estimate }),
            Err(error) => {
                debug!(row, %error, "row rejected");
                report.rejected.push(RejectedRow { row, error });
            }
        }
    }

    info!(
        estimated = report.estimated.len(),
        rejected = report.rejected.len(),
        "batch complete"
    );
    report
}

/// Writes one CSV line per tier of every estimated row.
pub fn write_report<W: Write>(
    report: &BatchReport,
    writer: W,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    for EstimatedRow { row, estimate } in &report.estimated {
        for result in estimate.tiers() {
            writer.serialize(OutputRow {
                row: *row,
                project_type: result.project_type.label(),
                tier: result.tier,
                initial_budget: round_half_up(result.initial_budget),
                contingency_fund: round_half_up(result.contingency_fund),
                time_to_save_months: round_whole(result.time_to_save_months),
                monthly_savings: round_half_up(result.monthly_savings),
                roi_percent: round_half_up(result.roi_percent).normalize(),
                total_budget: round_half_up(result.total_budget),
                value_increase: round_half_up(result.value_increase),
                updated_home_value: round_half_up(result.updated_home_value),
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reno_core::{ProjectType, ValidationFailure};

    fn readable(csv: &str) -> Vec<CalculatorForm> {
        load_forms(csv.as_bytes())
            .expect("should parse")
            .into_iter()
            .map(|row| row.expect("row should be readable"))
            .collect()
    }

    const MINIMAL_CSV: &str = "\
home_value,yearly_income,project_type
600000,85000,Kitchen
";

    const MIXED_CSV: &str = "\
home_value,yearly_income,project_type
600000,85000,Kitchen
40000,85000,Kitchen
\"$350,000\",62000,ADU
500000,90000,Pool
";

    // -----------------------------------------------------------------------
    // load_forms
    // -----------------------------------------------------------------------

    #[test]
    fn test_minimal_csv_loads_form() {
        let forms = readable(MINIMAL_CSV);

        assert_eq!(forms, vec![CalculatorForm::new("600000", "85000", "Kitchen")]);
    }

    #[test]
    fn test_quoted_amount_with_commas_is_kept_as_text() {
        let forms = readable(MIXED_CSV);

        assert_eq!(forms[2].home_value, "$350,000");
        assert_eq!(forms[2].project_type, "ADU");
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "project_type,yearly_income,home_value\nBathroom,70000,300000\n";
        let forms = readable(csv);

        assert_eq!(forms, vec![CalculatorForm::new("300000", "70000", "Bathroom")]);
    }

    #[test]
    fn test_whitespace_around_values_is_trimmed() {
        let csv = "home_value , yearly_income , project_type\n 600000 , 85000 , Roof Replacement \n";
        let forms = readable(csv);

        assert_eq!(forms[0].project_type, "Roof Replacement");
    }

    #[test]
    fn test_missing_column_stops_the_batch() {
        let csv = "home_value,project_type\n600000,Kitchen\n";
        let result = load_forms(csv.as_bytes());

        assert!(matches!(
            result,
            Err(BatchLoadError::MissingColumn("yearly_income"))
        ));
    }

    #[test]
    fn test_ragged_row_is_rejected_alone() {
        let csv = "\
home_value,yearly_income,project_type
600000,85000,Kitchen
600000,85000
500000,90000,ADU
";
        let rows = load_forms(csv.as_bytes()).expect("ragged rows do not stop the batch");

        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_ok());
        assert_eq!(
            rows[1],
            Err(RowError::Unreadable("expected 3 fields, found 2".to_string()))
        );
        assert!(rows[2].is_ok());
    }

    #[test]
    fn test_ragged_row_keeps_its_row_number() {
        let csv = "\
home_value,yearly_income,project_type
600000,85000,Kitchen
600000,85000,Kitchen,extra
500000,90000,ADU
";
        let rows = load_forms(csv.as_bytes()).unwrap();
        let report = estimate_all(&BudgetEstimator::default(), &rows);

        let estimated: Vec<usize> = report.estimated.iter().map(|r| r.row).collect();
        assert_eq!(estimated, vec![1, 3]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].row, 2);
        assert!(matches!(report.rejected[0].error, RowError::Unreadable(_)));
    }

    #[test]
    fn test_header_only_returns_empty_vec() {
        let forms = load_forms("home_value,yearly_income,project_type\n".as_bytes())
            .expect("header-only CSV is valid");

        assert!(forms.is_empty());
    }

    // -----------------------------------------------------------------------
    // estimate_all
    // -----------------------------------------------------------------------

    #[test]
    fn test_estimate_all_splits_accepted_and_rejected_rows() {
        let forms = load_forms(MIXED_CSV.as_bytes()).unwrap();
        let report = estimate_all(&BudgetEstimator::default(), &forms);

        let estimated: Vec<usize> = report.estimated.iter().map(|r| r.row).collect();
        let rejected: Vec<usize> = report.rejected.iter().map(|r| r.row).collect();
        assert_eq!(estimated, vec![1, 3]);
        assert_eq!(rejected, vec![2, 4]);
        assert_eq!(
            report.estimated[1].estimate.input.project_type(),
            ProjectType::Adu
        );
    }

    #[test]
    fn test_rejected_row_carries_validation_failure() {
        let forms = load_forms(MIXED_CSV.as_bytes()).unwrap();
        let report = estimate_all(&BudgetEstimator::default(), &forms);

        match &report.rejected[1].error {
            RowError::Estimate(EstimateError::Validation(error)) => assert_eq!(
                error.failures(),
                &[ValidationFailure::UnknownProjectType("Pool".to_string())]
            ),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // write_report
    // -----------------------------------------------------------------------

    #[test]
    fn test_write_report_emits_three_lines_per_row() {
        let forms = load_forms(MINIMAL_CSV.as_bytes()).unwrap();
        let report = estimate_all(&BudgetEstimator::default(), &forms);

        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "row,project_type,tier,initial_budget,contingency_fund,time_to_save_months,\
             monthly_savings,roi_percent,total_budget,value_increase,updated_home_value"
        );
        assert_eq!(
            lines[1],
            "1,Kitchen,low,30000.00,3000.00,23,1416.67,90,33000.00,29700.00,629700.00"
        );
        assert!(lines[2].starts_with("1,Kitchen,middle,"));
        assert!(lines[3].starts_with("1,Kitchen,high,"));
    }
}
