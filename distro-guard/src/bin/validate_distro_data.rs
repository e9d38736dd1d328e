//! Command-line gate for validating release CSV data.
//!
//! Exits 0 when the file is valid, 1 when findings were reported or the
//! input could not be read. Diagnostics stream to stderr in
//! `file:line: message.` form; `--report` additionally renders the
//! collected report on stdout.

use clap::{ArgGroup, Parser, ValueEnum};
use distro_guard::formatters::{HumanFormatter, JsonFormatter, ResultFormatter};
use distro_guard::logging::setup::{init_logging, LoggingConfig};
use distro_guard::runner::validate_file;
use distro_guard::schema::Distro;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Human,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "validate-distro-data", version, about = "Validate Debian and Ubuntu release CSV data", long_about = None)]
#[command(group(ArgGroup::new("distro").required(true).args(["debian", "ubuntu"])))]
struct Args {
    /// Validate a Debian CSV file
    #[arg(short = 'd', long)]
    debian: bool,

    /// Validate an Ubuntu CSV file
    #[arg(short = 'u', long)]
    ubuntu: bool,

    /// Render the collected report on stdout in the given format
    #[arg(long, value_enum)]
    report: Option<ReportFormat>,

    /// CSV file to validate
    #[arg(value_name = "csv-file")]
    csv_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(LoggingConfig::default()) {
        eprintln!("warning: failed to initialize logging: {err}");
    }

    let distro = if args.debian {
        Distro::Debian
    } else {
        Distro::Ubuntu
    };

    let stderr = io::stderr();
    let report = match validate_file(&args.csv_file, distro, stderr.lock()) {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "validation run aborted");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(format) = args.report {
        let formatter: Box<dyn ResultFormatter> = match format {
            ReportFormat::Human => Box::new(HumanFormatter::new()),
            ReportFormat::Json => Box::new(JsonFormatter::new().with_pretty(true)),
        };
        match formatter.format(&report) {
            Ok(rendered) => print!("{rendered}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
