use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use reno_cli::output::{self, OutputFormat};
use reno_cli::{app, logging};
use reno_core::CalculatorForm;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Renovation budget estimator.
///
/// Turns a home value, a yearly income and a project type into low, middle
/// and high budget tiers.
#[derive(Debug, Parser)]
#[command(name = "reno-estimator", version, about)]
struct Cli {
    /// TOML settings file overriding the validation thresholds.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `reno_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate a single project.
    Estimate {
        /// Current home value in USD, e.g. `600000` or `$600,000`.
        #[arg(long)]
        home_value: String,

        /// Household yearly income in USD.
        #[arg(long)]
        yearly_income: String,

        /// Project label, e.g. `Kitchen` or `Roof Replacement`.
        #[arg(long)]
        project_type: String,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List the accepted project types.
    Projects,

    /// Estimate every row of a CSV file.
    Batch {
        /// CSV with `home_value`, `yearly_income` and `project_type` columns.
        #[arg(short, long)]
        file: PathBuf,

        /// Where to write results. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    match cli.command {
        Command::Projects => {
            print!("{}", output::render_projects());
            Ok(ExitCode::SUCCESS)
        }
        Command::Estimate {
            home_value,
            yearly_income,
            project_type,
            format,
        } => {
            let estimator = app::build_estimator(cli.config.as_deref())?;
            let form = CalculatorForm::new(home_value, yearly_income, project_type);
            app::run_estimate(&estimator, &form, format, io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Batch { file, output } => {
            let estimator = app::build_estimator(cli.config.as_deref())?;
            let rejected = app::run_batch(
                &estimator,
                &file,
                output.as_deref(),
                io::stdout().lock(),
                io::stderr().lock(),
            )?;
            Ok(if rejected == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
