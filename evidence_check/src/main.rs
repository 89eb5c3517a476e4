//! evidence_check - validate a checklist-style evidence report
//!
//! Exit codes: 0 = report passes, 1 = report fails validation,
//! 2 = usage error or the input could not be read.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use evidence_check::{check_file, Report, Rules};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Checks a report for required section headings and ticked checklist items
#[derive(Parser, Debug)]
#[command(name = "evidence_check", version, about = "Validate a checklist-style evidence report")]
struct Args {
    /// Path to the report to validate
    report: PathBuf,

    /// TOML file overriding the required sections and checked items
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<Report> {
    let rules = match &args.rules {
        Some(path) => Rules::from_file(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => Rules::default(),
    };

    let report = check_file(&args.report, &rules)?;
    tracing::info!(report = %args.report.display(), passed = report.passed, "validation complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(report)
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "evidence_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments; clap exits with status 2 on usage errors
    let args = Args::parse();

    match run(&args) {
        Ok(report) if report.passed => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}
