//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameSession, Square};
use super::Invariant;

/// Invariant: every mark on the board comes from exactly one history entry,
/// and no entry ever targeted an occupied square.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.mark));
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board squares are write-once and match the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Move, Position};
    use crate::random::ScriptedSource;

    #[test]
    fn test_empty_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut session = GameSession::new();
        let mut rng = ScriptedSource::default();
        for index in [0, 1, 2, 3, 5, 6, 7, 8] {
            session.play_turn(index, &mut rng);
        }
        assert!(session.is_over());
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwrite_detected() {
        let mut session = GameSession::new();
        session.submit_player_move(4);
        session.history.push(Move::new(Mark::Opponent, Position::Center));
        session
            .board
            .set(Position::Center, Square::Occupied(Mark::Opponent));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
