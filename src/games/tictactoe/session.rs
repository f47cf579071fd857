//! Turn-taking state machine for a game against the heuristic opponent.
//!
//! The session is the only writer of its board. Player input arrives as a
//! raw cell index; the opponent reply is computed by
//! [`plan_opponent_move`](super::opponent::plan_opponent_move) when
//! [`GameSession::advance_opponent`] is called. Both transitions are
//! synchronous; any delay before showing the reply belongs to the shell.

use super::action::{Move, MoveResult, RejectReason};
use super::invariants::{InvariantSet, SessionInvariants};
use super::opponent::{OpponentMove, plan_opponent_move};
use super::rules::{GameOutcome, detect_outcome};
use super::{Board, Mark, Position, Square};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the session is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the player to pick a square.
    AwaitingPlayer,
    /// The player moved; the opponent reply is due.
    AwaitingOpponent,
    /// A side completed a line.
    Won(Mark),
    /// Board full without a line.
    Draw,
}

impl SessionState {
    /// Whether only a reset is accepted.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Won(_) | SessionState::Draw)
    }

    /// State that follows a board classification, with `next` to move if
    /// the game goes on.
    fn after(outcome: GameOutcome, next: Mark) -> Self {
        match outcome {
            GameOutcome::PlayerWins => SessionState::Won(Mark::Player),
            GameOutcome::OpponentWins => SessionState::Won(Mark::Opponent),
            GameOutcome::Draw => SessionState::Draw,
            GameOutcome::InProgress => match next {
                Mark::Player => SessionState::AwaitingPlayer,
                Mark::Opponent => SessionState::AwaitingOpponent,
            },
        }
    }
}

/// What happened during one [`GameSession::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Result of the player's input.
    pub player: MoveResult,
    /// The opponent reply, if one was made.
    pub opponent: Option<OpponentMove>,
    /// Board classification after the turn.
    pub outcome: GameOutcome,
}

/// A single game against the heuristic opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(super) board: Board,
    pub(super) state: SessionState,
    pub(super) history: Vec<Move>,
}

impl GameSession {
    /// Starts a game with an empty board and the player to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: SessionState::AwaitingPlayer,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the moves made so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> GameOutcome {
        detect_outcome(&self.board)
    }

    /// Side to move, `None` once the game is decided.
    pub fn to_move(&self) -> Option<Mark> {
        match self.state {
            SessionState::AwaitingPlayer => Some(Mark::Player),
            SessionState::AwaitingOpponent => Some(Mark::Opponent),
            SessionState::Won(_) | SessionState::Draw => None,
        }
    }

    /// Whether the game is decided.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Applies player input. Invalid input leaves the session untouched.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit_player_move(&mut self, index: usize) -> MoveResult {
        let rejection = match self.state {
            SessionState::Won(_) | SessionState::Draw => Some(RejectReason::GameOver),
            SessionState::AwaitingOpponent => Some(RejectReason::NotPlayersTurn),
            SessionState::AwaitingPlayer => None,
        };
        if let Some(reason) = rejection {
            debug!(%reason, "Ignoring player input");
            return MoveResult::Rejected(reason);
        }

        let Some(pos) = Position::from_index(index) else {
            debug!(index, "Ignoring off-board input");
            return MoveResult::Rejected(RejectReason::OutOfRange(index));
        };
        if !self.board.is_empty(pos) {
            debug!(position = ?pos, "Ignoring occupied square");
            return MoveResult::Rejected(RejectReason::Occupied(pos));
        }

        self.place(Mark::Player, pos);
        info!(position = ?pos, next = ?self.state, "Player moved");
        MoveResult::Accepted(pos)
    }

    /// Makes the opponent reply if one is due.
    ///
    /// Only acts in [`SessionState::AwaitingOpponent`], so calling it again
    /// before the player moves is a no-op. If no square is free the state is
    /// settled from the board alone.
    #[instrument(skip(self, rng), fields(state = ?self.state))]
    pub fn advance_opponent<R: RandomSource>(&mut self, rng: &mut R) -> Option<OpponentMove> {
        if self.state != SessionState::AwaitingOpponent {
            return None;
        }

        match plan_opponent_move(&self.board, rng) {
            Some(reply) => {
                self.place(Mark::Opponent, reply.position);
                info!(position = ?reply.position, reason = ?reply.reason, next = ?self.state, "Opponent moved");
                Some(reply)
            }
            None => {
                warn!("Opponent had no free square");
                self.state = SessionState::after(self.outcome(), Mark::Player);
                None
            }
        }
    }

    /// Player move followed immediately by the opponent reply.
    #[instrument(skip(self, rng))]
    pub fn play_turn<R: RandomSource>(&mut self, index: usize, rng: &mut R) -> TurnReport {
        let player = self.submit_player_move(index);
        let opponent = if player.is_accepted() {
            self.advance_opponent(rng)
        } else {
            None
        };
        TurnReport {
            player,
            opponent,
            outcome: self.outcome(),
        }
    }

    /// Clears the board and gives the player the first move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    fn place(&mut self, mark: Mark, pos: Position) {
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));
        self.state = SessionState::after(self.outcome(), mark.other());
        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated"
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    #[test]
    fn test_player_move_hands_turn_to_opponent() {
        let mut session = GameSession::new();
        assert_eq!(session.submit_player_move(0), MoveResult::Accepted(Position::TopLeft));
        assert_eq!(session.state(), SessionState::AwaitingOpponent);
        assert_eq!(session.to_move(), Some(Mark::Opponent));
    }

    #[test]
    fn test_second_player_move_waits_for_opponent() {
        let mut session = GameSession::new();
        session.submit_player_move(0);
        assert_eq!(
            session.submit_player_move(1),
            MoveResult::Rejected(RejectReason::NotPlayersTurn)
        );
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_opponent_trigger_fires_once() {
        let mut session = GameSession::new();
        let mut rng = ScriptedSource::default();
        session.submit_player_move(0);
        assert!(session.advance_opponent(&mut rng).is_some());
        assert!(session.advance_opponent(&mut rng).is_none());
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.state(), SessionState::AwaitingPlayer);
    }

    #[test]
    fn test_after_maps_outcomes() {
        assert_eq!(
            SessionState::after(GameOutcome::InProgress, Mark::Opponent),
            SessionState::AwaitingOpponent
        );
        assert_eq!(
            SessionState::after(GameOutcome::OpponentWins, Mark::Player),
            SessionState::Won(Mark::Opponent)
        );
        assert_eq!(SessionState::after(GameOutcome::Draw, Mark::Player), SessionState::Draw);
    }
}
