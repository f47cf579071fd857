//! Game implementations.
//!
//! Each game is a plain state holder with no timing of its own; the hub
//! screens decide when to call into them.

pub mod dice;
pub mod memory;
pub mod mystery_box;
pub mod rps;
pub mod tictactoe;

use serde::{Deserialize, Serialize};

/// Result of a single round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RoundResult {
    /// The player won.
    #[display("You win!")]
    Win,
    /// The player lost.
    #[display("You lose!")]
    Lose,
    /// Nobody won.
    #[display("It's a draw!")]
    Draw,
}

impl RoundResult {
    /// Whether the player won.
    pub fn is_win(self) -> bool {
        self == RoundResult::Win
    }
}
