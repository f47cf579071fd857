//! Command-line interface for aptos_arena.

use clap::{Parser, Subcommand};

use aptos_arena::DEFAULT_CONFIG_FILE;

/// Aptos Arena - terminal casino game hub
#[derive(Parser, Debug)]
#[command(name = "aptos_arena")]
#[command(about = "Casino mini-games with wallet rewards, in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: std::path::PathBuf,

    /// Seed for all game randomness
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal hub
    Hub,

    /// Pit a random player against the tic-tac-toe opponent
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: usize,
    },

    /// List the games on offer
    Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_args() {
        let cli = Cli::parse_from(["aptos_arena", "simulate", "--games", "10", "--seed", "5"]);
        assert_eq!(cli.seed, Some(5));
        assert!(matches!(cli.command, Command::Simulate { games: 10 }));
        assert_eq!(cli.config, std::path::PathBuf::from("arena.toml"));
    }

    #[test]
    fn test_hub_is_default_free() {
        assert!(Cli::try_parse_from(["aptos_arena"]).is_err());
        let cli = Cli::parse_from(["aptos_arena", "--config", "x.toml", "hub"]);
        assert!(matches!(cli.command, Command::Hub));
        assert_eq!(cli.config, std::path::PathBuf::from("x.toml"));
    }
}
