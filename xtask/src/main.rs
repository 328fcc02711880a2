//! xtask - Development task runner for xduce
//!
//! Usage:
//!   cargo xtask check-features
//!   cargo xtask bench [--filter <name>]

mod check_features;

use std::process::Command;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for xduce")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type-check every feature combination in the crate's feature graph
    CheckFeatures,
    /// Run criterion benchmarks, optionally filtered by name
    Bench(BenchArgs),
}

#[derive(clap::Args)]
struct BenchArgs {
    /// Substring filter passed through to criterion
    #[arg(long)]
    filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckFeatures => check_features::run(),
        Commands::Bench(args) => run_bench(&args),
    }
}

fn run_bench(args: &BenchArgs) -> anyhow::Result<()> {
    let mut command = Command::new("cargo");
    command.args(["bench", "--features", "full"]);
    if let Some(filter) = &args.filter {
        command.arg("--").arg(filter);
    }
    let status = command.status()?;
    anyhow::ensure!(status.success(), "cargo bench failed");
    Ok(())
}
