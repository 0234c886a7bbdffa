//! CLI entry point for rbacguard.
//!
//! This module is intentionally thin: it handles argument parsing, printing,
//! and exit codes. All validation logic lives in the `rbacguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use rbacguard_app::Validator;

#[derive(Parser, Debug)]
#[command(
    name = "rbacguard",
    version,
    about = "Reference-integrity validator for ServiceRole policy files"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check ServiceRoleBindings against ServiceRoles and print a report.
    Validate {
        /// Policy YAML file(s); repeatable, comma-separated lists accepted.
        #[arg(short = 'f', long = "file", required = true, value_delimiter = ',')]
        files: Vec<Utf8PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Validate { files } => cmd_validate(files),
    };

    if let Err(err) = result {
        eprintln!("rbacguard error: {err:#}");
        std::process::exit(1);
    }
}

/// Diagnostics are advisory: the report is printed verbatim and the exit
/// code stays 0. Only a load failure is fatal. Callers that want to fail a
/// pipeline on a non-empty report must check the output themselves.
fn cmd_validate(files: Vec<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = Validator::new(files)
        .run()
        .context("validate policy files")?;
    print!("{report}");
    Ok(())
}
