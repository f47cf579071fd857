//! Heuristic move selection for the automated opponent.
//!
//! A fixed priority list rather than a search: take a winning square, block
//! the player's winning square, then prefer center, corners and sides. A
//! careful player can still set up a fork and beat it.

use super::rules::{GameOutcome, detect_outcome};
use super::{Board, Mark, Position};
use crate::random::RandomSource;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveReason {
    /// Completes an opponent line immediately.
    #[display("going for the win")]
    WinNow,
    /// Takes the square the player needs to complete a line.
    #[display("blocking your line")]
    Block,
    /// Takes the center.
    #[display("taking the center")]
    Center,
    /// Random free corner.
    #[display("taking a corner")]
    Corner,
    /// Random free side.
    #[display("taking a side")]
    Side,
    /// Lowest free square.
    #[display("taking the last square")]
    Fallback,
}

/// A chosen square and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct OpponentMove {
    /// Square to play.
    pub position: Position,
    /// Rule that picked it.
    pub reason: MoveReason,
}

/// First empty square (index order) where `mark` would complete a line.
pub fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    let wanted = match mark {
        Mark::Player => GameOutcome::PlayerWins,
        Mark::Opponent => GameOutcome::OpponentWins,
    };
    Position::valid_moves(board)
        .into_iter()
        .find(|&pos| detect_outcome(&board.with_mark(pos, mark)) == wanted)
}

/// Chooses the opponent's next square, with the rule that chose it.
///
/// Does not check whether the game is already decided; on a full board it
/// returns `None`.
#[instrument(skip(board, rng))]
pub fn plan_opponent_move<R: RandomSource>(board: &Board, rng: &mut R) -> Option<OpponentMove> {
    let empty = Position::valid_moves(board);
    if empty.is_empty() {
        return None;
    }

    let planned = if let Some(pos) = completing_square(board, Mark::Opponent) {
        OpponentMove::new(pos, MoveReason::WinNow)
    } else if let Some(pos) = completing_square(board, Mark::Player) {
        OpponentMove::new(pos, MoveReason::Block)
    } else if board.is_empty(Position::Center) {
        OpponentMove::new(Position::Center, MoveReason::Center)
    } else {
        let corners: Vec<Position> = empty.iter().copied().filter(|p| p.is_corner()).collect();
        let sides: Vec<Position> = empty.iter().copied().filter(|p| p.is_side()).collect();
        if let Some(pos) = rng.choose(&corners) {
            OpponentMove::new(pos, MoveReason::Corner)
        } else if let Some(pos) = rng.choose(&sides) {
            OpponentMove::new(pos, MoveReason::Side)
        } else {
            OpponentMove::new(empty[0], MoveReason::Fallback)
        }
    };

    debug!(position = ?planned.position, reason = ?planned.reason, "Opponent chose square");
    Some(planned)
}

/// Chooses the opponent's next square.
pub fn select_opponent_move<R: RandomSource>(board: &Board, rng: &mut R) -> Option<Position> {
    plan_opponent_move(board, rng).map(|m| m.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    fn board(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut rng = ScriptedSource::default();
        assert_eq!(select_opponent_move(&board("XOXOXXOXO"), &mut rng), None);
    }

    #[test]
    fn test_win_now_reason() {
        let mut rng = ScriptedSource::default();
        let planned = plan_opponent_move(&board("OO_XX_X__"), &mut rng).unwrap();
        assert_eq!(planned, OpponentMove::new(Position::TopRight, MoveReason::WinNow));
    }

    #[test]
    fn test_block_reason() {
        let mut rng = ScriptedSource::default();
        let planned = plan_opponent_move(&board("X___X___O"), &mut rng);
        // X threatens nothing on 0-4-8 (O holds 8); no block, center taken.
        assert_eq!(planned.map(|m| m.reason), Some(MoveReason::Corner));

        let planned = plan_opponent_move(&board("X_X_O____"), &mut rng).unwrap();
        assert_eq!(planned, OpponentMove::new(Position::TopCenter, MoveReason::Block));
    }

    #[test]
    fn test_scripted_corner_choice() {
        // Center taken by X, all corners free: script index 2 -> BottomLeft.
        let mut rng = ScriptedSource::new([2]);
        let planned = plan_opponent_move(&board("____X____"), &mut rng).unwrap();
        assert_eq!(planned, OpponentMove::new(Position::BottomLeft, MoveReason::Corner));
    }

    #[test]
    fn test_side_when_corners_and_center_taken() {
        // X O X / _ X _ / O X O -> no line threats, corners and center full.
        let layout = "XOX_X_OXO";
        let mut rng = ScriptedSource::new([1]);
        let planned = plan_opponent_move(&board(layout), &mut rng).unwrap();
        assert_eq!(planned.reason, MoveReason::Side);
        assert_eq!(planned.position, Position::MiddleRight);
    }
}
