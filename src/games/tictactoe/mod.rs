//! Tic-tac-toe against a heuristic computer opponent.

mod action;
mod invariants;
mod opponent;
mod position;
mod session;
mod types;

pub mod rules;

pub use action::{Move, MoveResult, RejectReason};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, SessionInvariants,
};
pub use opponent::{
    MoveReason, OpponentMove, completing_square, plan_opponent_move, select_opponent_move,
};
pub use position::Position;
pub use rules::{GameOutcome, LINES, check_winner, detect_outcome, is_draw, is_full};
pub use session::{GameSession, SessionState, TurnReport};
pub use types::{Board, BoardParseError, Mark, Square};
