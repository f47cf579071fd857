//! Outcome classification of a board.

use super::super::{Board, Mark};
use super::draw::is_full;
use super::win::check_winner;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal or non-terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameOutcome {
    /// Moves remain and nobody has a line.
    #[display("In progress")]
    InProgress,
    /// The player completed a line.
    #[display("You win!")]
    PlayerWins,
    /// The opponent completed a line.
    #[display("The computer wins")]
    OpponentWins,
    /// Full board, no line.
    #[display("It's a draw!")]
    Draw,
}

impl GameOutcome {
    /// Whether no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::PlayerWins => Some(Mark::Player),
            GameOutcome::OpponentWins => Some(Mark::Opponent),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => GameOutcome::PlayerWins,
            Mark::Opponent => GameOutcome::OpponentWins,
        }
    }
}

/// Classifies a board. Total over every combination of cell values.
#[instrument(skip(board))]
pub fn detect_outcome(board: &Board) -> GameOutcome {
    if let Some(mark) = check_winner(board) {
        GameOutcome::won_by(mark)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(detect_outcome(&Board::new()), GameOutcome::InProgress);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(detect_outcome(&board), GameOutcome::PlayerWins);
    }

    #[test]
    fn test_terminal_flags() {
        assert!(!GameOutcome::InProgress.is_terminal());
        assert!(GameOutcome::Draw.is_terminal());
        assert_eq!(GameOutcome::OpponentWins.winner(), Some(Mark::Opponent));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
