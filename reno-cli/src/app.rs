use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use reno_core::{BudgetEstimator, CalculatorForm, EstimateTable};
use tracing::{debug, info};

use crate::batch;
use crate::output::{self, OutputFormat};
use crate::settings::Settings;

/// Builds an estimator from the settings file, if any.
pub fn build_estimator(config_path: Option<&Path>) -> Result<BudgetEstimator> {
    let settings = Settings::load_or_default(config_path).context("failed to load settings")?;
    debug!(?settings, "settings loaded");
    BudgetEstimator::new(settings.estimator).context("invalid estimator settings")
}

/// Estimates a single form and writes the result to `out`.
///
/// Validation and computation failures come back as errors; nothing is
/// written in that case.
pub fn run_estimate<W: Write>(
    estimator: &BudgetEstimator,
    form: &CalculatorForm,
    format: OutputFormat,
    mut out: W,
) -> Result<()> {
    let estimate = estimator.estimate(form)?;
    info!(project_type = %estimate.input.project_type(), "estimate ready");

    let rendered = match format {
        OutputFormat::Table => output::render_table(&EstimateTable::from_estimate(&estimate)),
        OutputFormat::Json => {
            let mut json = output::render_json(&estimate).context("failed to encode estimate")?;
            json.push('\n');
            json
        }
    };
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Estimates every row of a CSV file.
///
/// Output goes to `output_path` when given, otherwise to `out`. Returns the
/// number of rejected rows so the caller can pick an exit status.
pub fn run_batch<W: Write>(
    estimator: &BudgetEstimator,
    input_path: &Path,
    output_path: Option<&Path>,
    out: W,
    mut err: impl Write,
) -> Result<usize> {
    let forms = batch::load_forms_from_file(input_path)
        .with_context(|| format!("failed to load batch input: {}", input_path.display()))?;
    debug!(rows = forms.len(), "batch input loaded");

    let report = batch::estimate_all(estimator, &forms);
    for rejected in &report.rejected {
        writeln!(err, "row {}: {}", rejected.row, rejected.error)?;
    }

    let written = match output_path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create: {}", path.display()))?;
            batch::write_report(&report, file)
        }
        None => batch::write_report(&report, out),
    };
    written.context("failed to write batch output")?;

    Ok(report.rejected.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_estimate_writes_table() {
        let mut out = Vec::new();
        run_estimate(
            &BudgetEstimator::default(),
            &CalculatorForm::new("600000", "85000", "Kitchen"),
            OutputFormat::Table,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Estimated Updated Home Value"));
    }

    #[test]
    fn run_estimate_writes_nothing_on_validation_failure() {
        let mut out = Vec::new();
        let result = run_estimate(
            &BudgetEstimator::default(),
            &CalculatorForm::new("40000", "85000", "Kitchen"),
            OutputFormat::Table,
            &mut out,
        );

        let error = result.unwrap_err();
        assert!(error.to_string().contains("home value must be at least $50,000.00"));
        assert!(out.is_empty());
    }

    #[test]
    fn build_estimator_without_config_uses_defaults() {
        let estimator = build_estimator(None).unwrap();

        assert_eq!(estimator.config(), &reno_core::EstimatorConfig::default());
    }
}
