//! Contracts Re-export Generator
//!
//! Regenerates the jobs-contracts re-export files from the checked-in
//! OpenAPI binding modules.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use jobs_contracts_gen::errors::GeneratorError;
use jobs_contracts_gen::output::generate_and_write_all;

/// Contracts generator - rebuilds the re-export surface from the bindings
#[derive(Parser, Debug)]
#[command(name = "contracts-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the contracts crate
    #[arg(long, default_value = "contracts")]
    contracts_dir: PathBuf,

    /// Print generated files without writing them
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose > 0 {
        eprintln!("Contracts directory: {}", cli.contracts_dir.display());
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    generate_and_write_all(&cli.contracts_dir, cli.dry_run)?;

    if !cli.dry_run {
        println!("{}", "Re-export files regenerated successfully.".green().bold());
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}
