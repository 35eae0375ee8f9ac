//! CLI entrypoint for netinet-core conformance tooling.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use netinet_conformance::{
    ConformanceError, ConstantTable, capture_constant_table, render_conformance_markdown,
    render_drift_markdown, run_host_conformance, verify_constant_table,
};

/// CLI for host-conformance and drift tooling around netinet-core.
#[derive(Debug, Parser)]
#[command(name = "netinet-conformance")]
#[command(about = "Conformance tooling for netinet-core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Supported CLI subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Check every mirrored constant and predicate against the host.
    Check {
        /// Output markdown report path.
        #[arg(long)]
        report_md: PathBuf,
        /// Output json report path.
        #[arg(long)]
        report_json: PathBuf,
    },
    /// Dump the full constant table as a json fixture.
    Dump {
        /// Output fixture path.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the current build against a previously dumped fixture.
    Verify {
        /// Input fixture path.
        #[arg(long)]
        fixture: PathBuf,
        /// Output markdown report path.
        #[arg(long)]
        report_md: PathBuf,
    },
}

fn run() -> Result<bool, ConformanceError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            report_md,
            report_json,
        } => {
            let report = run_host_conformance();
            fs::write(report_md, render_conformance_markdown(&report))?;
            fs::write(report_json, serde_json::to_string_pretty(&report)?)?;
            if !report.is_clean() {
                eprintln!("{} of {} checks mismatched", report.mismatches, report.total);
            }
            Ok(report.is_clean())
        }
        Command::Dump { output } => {
            let table = capture_constant_table();
            fs::write(output, serde_json::to_string_pretty(&table)?)?;
            Ok(true)
        }
        Command::Verify { fixture, report_md } => {
            let body = fs::read_to_string(fixture)?;
            let fixture_table: ConstantTable = serde_json::from_str(&body)?;
            let diff = verify_constant_table(&fixture_table);
            fs::write(report_md, render_drift_markdown(&diff))?;
            if !diff.is_clean() {
                eprintln!(
                    "drift detected: {} changed, {} missing, {} unexpected",
                    diff.changed.len(),
                    diff.missing.len(),
                    diff.unexpected.len()
                );
            }
            Ok(diff.is_clean())
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
