//! Command-line front end for the battle engine.
//!
//! Every command prints JSON on stdout; logs go to stderr.
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use commands::Command;
use config::ArenaConfig;

/// Hero vs villain battle arena
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Simulate and script hero/villain battles", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory for stored battles (overrides ARENA_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Seed for simulations (overrides ARENA_SEED)
    #[arg(long, global = true, value_name = "SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ARENA_* variables)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ArenaConfig::from_env();
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    cli.command.execute(&config)
}
