//! Generate or check the hot keys document from the key-binding table.
//!
//! Responsibilities:
//! - Map command-line flags onto the configuration loader.
//! - Run generate or check mode and print the outcome.
//! - Map outcomes to structured exit codes.
//!
//! Does NOT handle:
//! - Rendering or linting logic (see the `hotkeys_docs` library).
//!
//! Invariants:
//! - `load_dotenv()` is called before flags are applied.
//! - Check mode prints every finding before exiting non-zero.
//! - Logs go to stderr; reports go to stdout.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use hotkeys_config::{ConfigLoader, DocsConfig};
use hotkeys_docs::{CheckReport, ExitCode, SyncStatus};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Generate the hot keys document from the key-binding table.
#[derive(Debug, Parser)]
#[command(
    name = "generate-hotkeys",
    about = "Regenerate or verify the hot keys reference document",
    after_help = "Examples:\n  generate-hotkeys\n  generate-hotkeys --check\n  generate-hotkeys --check --table keys.json --exempt-key q\n"
)]
struct Args {
    /// Check the document and lint the key table without writing.
    #[arg(long)]
    check: bool,

    /// Path of the hot keys document. Defaults to docs/hotkeys.md.
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON key table to use instead of the built-in table.
    #[arg(long)]
    table: Option<PathBuf>,

    /// Key combination allowed to repeat within a category. Replaces the defaults.
    #[arg(long = "exempt-key", value_name = "KEY")]
    exempt_keys: Vec<String>,
}

fn main() {
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(loader, args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::GeneralError
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn build_config(mut loader: ConfigLoader, args: &Args) -> anyhow::Result<DocsConfig> {
    loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(path) = &args.output {
        loader = loader.with_output_path(path.clone());
    }
    if let Some(path) = &args.table {
        loader = loader.with_table_path(path.clone());
    }
    if !args.exempt_keys.is_empty() {
        loader = loader.with_exempt_keys(args.exempt_keys.clone());
    }

    loader.build().context("Failed to build configuration")
}

fn run(loader: ConfigLoader, args: Args) -> anyhow::Result<ExitCode> {
    let config = build_config(loader, &args)?;
    let table = config.load_table().context("Failed to load key table")?;

    if args.check {
        let report = hotkeys_docs::check(&table, &config.policy, &config.output_path)?;
        print_check_report(&report, &config.output_path);
        return Ok(report.exit_code());
    }

    let status = hotkeys_docs::generate(&table, &config.output_path)?;
    match status {
        SyncStatus::InSync => println!("{} is already up to date.", config.output_path.display()),
        SyncStatus::OutOfSync => println!("{} was out of date.", config.output_path.display()),
    }
    println!("Hot Keys list saved in {}", config.output_path.display());
    Ok(ExitCode::Success)
}

fn print_check_report(report: &CheckReport, path: &Path) {
    for finding in report.lint.iter() {
        println!("{finding}");
    }
    if !report.lint.is_clean() {
        println!(
            "Found {} problem(s) in the key table. Rerun after fixing them.",
            report.lint.len()
        );
        return;
    }

    match report.sync {
        Some(SyncStatus::InSync) => println!("{} is in sync with the key table.", path.display()),
        _ => println!(
            "{} is out of date. Run 'generate-hotkeys' to update it.",
            path.display()
        ),
    }
}
