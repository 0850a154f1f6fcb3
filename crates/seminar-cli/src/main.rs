//! Seminar feedback summary CLI
//!
//! Reads a feedback CSV export and writes the PDF summary report, the same
//! document the HTTP service returns.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use seminar_core::ColumnMapping;
use seminar_export::styles::ReportStyles;
use seminar_export::summary::summarize_csv;

/// Summarize seminar feedback responses into a PDF report
#[derive(Parser, Debug)]
#[command(name = "seminar-report")]
#[command(about = "Summarize a seminar feedback CSV into a PDF report", long_about = None)]
#[command(version)]
struct Args {
    /// Feedback CSV export
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the PDF report
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// JSON file overriding the default column markers
    #[arg(short, long, value_name = "FILE")]
    mapping: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let mapping = match &args.mapping {
        Some(path) => ColumnMapping::from_path(path)
            .wrap_err_with(|| format!("loading column mapping from {}", path.display()))?,
        None => ColumnMapping::default(),
    };

    let csv = fs::read(&args.input)
        .wrap_err_with(|| format!("reading {}", args.input.display()))?;

    let pdf = summarize_csv(&csv, &mapping, &ReportStyles::default())
        .wrap_err_with(|| format!("summarizing {}", args.input.display()))?;

    fs::write(&args.output, &pdf)
        .wrap_err_with(|| format!("writing {}", args.output.display()))?;

    if !args.quiet {
        println!("Successfully generated PDF at {}", args.output.display());
    }
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}
