use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;

use kira_cdsse::input::{InputError, load_readings};
use kira_cdsse::logging::init_tracing;
use kira_cdsse::pipeline::stage2_batch::run_stage2;
use kira_cdsse::pipeline::stage3_report::{Stage3Input, write_reports};
use kira_cdsse::report::ReportError;
use kira_cdsse::report::json::render_fractions_json;
use kira_cdsse::report::text::render_fractions_text;
use kira_cdsse::{
    EllipticityReading, EstimateError, EstimatorParams, NonFinitePolicy, estimate_with,
};

const DEMO_READING: EllipticityReading = EllipticityReading {
    e208: -12000.0,
    e217: -8000.0,
    e195: 15000.0,
};

#[derive(Debug, Parser)]
#[command(name = "kira-cdsse")]
#[command(about = "Heuristic secondary-structure fractions from CD ellipticity at 208/217/195 nm", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate fractions for a single reading
    Estimate {
        /// Mean residue ellipticity at 208 nm (deg·cm²·dmol⁻¹)
        #[arg(long, allow_negative_numbers = true)]
        e208: f64,

        /// Mean residue ellipticity at 217 nm
        #[arg(long, allow_negative_numbers = true)]
        e217: f64,

        /// Mean residue ellipticity at 195 nm
        #[arg(long, allow_negative_numbers = true)]
        e195: f64,

        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        #[arg(long, value_enum, default_value = "reject")]
        non_finite: NonFiniteArg,
    },

    /// Estimate fractions for every sample of a TSV table and write reports
    Run {
        /// Tab-separated table with e208/e217/e195 columns (plain or .gz)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for fractions.tsv, summary.json and report.txt
        #[arg(short, long)]
        out: PathBuf,

        #[arg(long, value_enum, default_value = "reject")]
        non_finite: NonFiniteArg,
    },

    /// Run the reference reading (-12000, -8000, 15000) and print the result
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NonFiniteArg {
    /// Fail on NaN or infinite readings
    Reject,
    /// Feed NaN or infinite readings through the raw arithmetic
    Passthrough,
}

impl From<NonFiniteArg> for NonFinitePolicy {
    fn from(value: NonFiniteArg) -> Self {
        match value {
            NonFiniteArg::Reject => NonFinitePolicy::Reject,
            NonFiniteArg::Passthrough => NonFinitePolicy::Passthrough,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Estimate(#[from] EstimateError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Estimate {
            e208,
            e217,
            e195,
            format,
            non_finite,
        } => {
            let params = EstimatorParams::with_policy(non_finite.into());
            let reading = EllipticityReading::new(e208, e217, e195);
            println!("{}", render_single(&reading, &params, format)?);
        }
        Command::Run {
            input,
            out,
            non_finite,
        } => {
            let params = EstimatorParams::with_policy(non_finite.into());
            info!(input = %input.display(), "reading ellipticity table");
            let table = load_readings(&input)?;
            let batch = run_stage2(&table, &params);
            write_reports(
                &Stage3Input {
                    batch: &batch,
                    params: &params,
                    tool_name: env!("CARGO_PKG_NAME").to_string(),
                    tool_version: env!("CARGO_PKG_VERSION").to_string(),
                },
                &out,
            )?;
        }
        Command::Demo => {
            let params = EstimatorParams::default_v1();
            println!("{}", render_single(&DEMO_READING, &params, OutputFormat::Json)?);
        }
    }
    Ok(())
}

fn render_single(
    reading: &EllipticityReading,
    params: &EstimatorParams,
    format: OutputFormat,
) -> Result<String, CliError> {
    let fractions = estimate_with(reading, params)?;
    let rendered = match format {
        OutputFormat::Json => render_fractions_json(&fractions)?,
        OutputFormat::Text => render_fractions_text(&fractions).trim_end().to_string(),
    };
    Ok(rendered)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
