//! Hub system: wallet splash, game carousel, and the game screens.

mod carousel;
mod catalog;
mod controller;
mod screen;
mod screens;
mod widgets;

pub use carousel::Carousel;
pub use catalog::GameKind;
pub use controller::{ActiveScreen, HubController};
pub use screen::{HubContext, Screen, ScreenTransition};
pub use screens::{
    DiceScreen, GameSelectScreen, MemoryScreen, MysteryBoxScreen, RpsScreen, TicTacToeScreen,
    WalletConnectScreen,
};

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::ArenaConfig;
use crate::random::arena_rng;

/// Runs the terminal hub until the player quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(config))]
pub async fn run_hub(config: &ArenaConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let provider = config.dev_wallet()?;
    let ctx = HubContext::new(arena_rng(seed), config.timing().clone());
    let mut controller = HubController::new(ctx, Box::new(provider), config.reward_issuer());

    info!("Starting Aptos Arena hub");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "Hub exited with error");
    }
    result
}
