//! Moves and move results for tic-tac-toe.
//!
//! Rejected player input is a value, not an error: the session ignores the
//! move and reports why so the shell can log it.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub mark: Mark,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a player move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// Index outside 0-8.
    #[display("Square {} is off the board", _0)]
    OutOfRange(usize),
    /// The square already holds a mark.
    #[display("{} is already taken", _0)]
    Occupied(Position),
    /// The opponent has not replied yet.
    #[display("Waiting for the computer")]
    NotPlayersTurn,
    /// The game is over; only a reset is accepted.
    #[display("Game is already over")]
    GameOver,
}

/// Result of submitting player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The mark was placed.
    Accepted(Position),
    /// Nothing changed.
    Rejected(RejectReason),
}

impl MoveResult {
    /// Whether the move changed the board.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }
}
