//! Alternating turn invariant: player, opponent, player, ...

use super::super::{GameSession, Mark, SessionState};
use super::Invariant;

/// Invariant: the player moves first, sides alternate, and the session
/// state agrees with the parity of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if let Some(first) = history.first()
            && first.mark != Mark::Player
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        match session.state() {
            SessionState::AwaitingPlayer => history.len() % 2 == 0,
            SessionState::AwaitingOpponent => history.len() % 2 == 1,
            SessionState::Won(_) | SessionState::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Player moves first and sides alternate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Position};
    use crate::random::ScriptedSource;

    #[test]
    fn test_empty_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_holds_through_turns() {
        let mut session = GameSession::new();
        let mut rng = ScriptedSource::default();
        session.submit_player_move(0);
        assert!(AlternatingTurnInvariant::holds(&session));
        session.advance_opponent(&mut rng);
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_same_side_twice_violates() {
        let mut session = GameSession::new();
        session.submit_player_move(0);
        session.history.push(Move::new(Mark::Player, Position::TopCenter));
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
