//! Aptos Arena - unified CLI
//!
//! Terminal game hub, headless simulator and game catalog.

#![warn(missing_docs)]

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use aptos_arena::{ArenaConfig, GameKind, arena_rng, run_hub, simulate};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ArenaConfig::load_or_default(&cli.config)?.with_process_env()?;

    match cli.command {
        Command::Hub => {
            init_file_logging(&config)?;
            run_hub(&config, cli.seed).await
        }
        Command::Simulate { games } => {
            init_stderr_logging(&config);
            run_simulation(games, cli.seed)
        }
        Command::Catalog => {
            init_stderr_logging(&config);
            print_catalog();
            Ok(())
        }
    }
}

fn env_filter(config: &ArenaConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging().filter()))
}

/// Logs to a file so output does not corrupt the terminal UI.
fn init_file_logging(config: &ArenaConfig) -> Result<()> {
    let path: &Path = config.logging().file();
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn init_stderr_logging(config: &ArenaConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the headless simulator
#[instrument]
fn run_simulation(games: usize, seed: Option<u64>) -> Result<()> {
    info!("Starting simulation");
    let mut rng = arena_rng(seed);
    let report = simulate(games, &mut rng);
    println!("{}", report);
    Ok(())
}

fn print_catalog() {
    for (i, game) in GameKind::all().into_iter().enumerate() {
        let reward = if game.pays_reward() { "  [pays 0.001 APT]" } else { "" };
        println!("{}. {}{}", i + 1, game.title(), reward);
        println!("   {}", game.description());
        for line in game.how_to_play() {
            println!("   - {}", line);
        }
    }
}
