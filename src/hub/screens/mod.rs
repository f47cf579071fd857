//! Screen implementations for the hub state machine.

mod dice;
mod game_select;
mod memory;
mod mystery_box;
mod rps;
mod tictactoe;
mod wallet_connect;

pub use dice::DiceScreen;
pub use game_select::GameSelectScreen;
pub use memory::MemoryScreen;
pub use mystery_box::MysteryBoxScreen;
pub use rps::RpsScreen;
pub use tictactoe::TicTacToeScreen;
pub use wallet_connect::WalletConnectScreen;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::hub::ScreenTransition;

/// Keys every game screen shares: Esc or `b` goes back to the carousel.
fn back_key(key: &KeyEvent) -> Option<ScreenTransition> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(ScreenTransition::GoToGameSelect)
        }
        _ => None,
    }
}

/// Arrow key as a grid step.
fn arrow_step(key: &KeyEvent) -> Option<(i32, i32)> {
    match key.code {
        KeyCode::Left => Some((-1, 0)),
        KeyCode::Right => Some((1, 0)),
        KeyCode::Up => Some((0, -1)),
        KeyCode::Down => Some((0, 1)),
        _ => None,
    }
}

/// Whether `deadline` has been reached.
fn is_due(deadline: Option<Instant>, now: Instant) -> bool {
    deadline.is_some_and(|d| now >= d)
}
