//! Headless games: a uniformly random player against the heuristic opponent.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::{GameOutcome, GameSession, Position};
use crate::random::RandomSource;

/// Tally of simulated games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters, derive_more::Display)]
#[display(
    "{} games: random player {} / heuristic {} / draws {}",
    games,
    player_wins,
    opponent_wins,
    draws
)]
pub struct SimulationReport {
    games: usize,
    player_wins: usize,
    opponent_wins: usize,
    draws: usize,
}

impl SimulationReport {
    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::PlayerWins => self.player_wins += 1,
            GameOutcome::OpponentWins => self.opponent_wins += 1,
            GameOutcome::Draw | GameOutcome::InProgress => self.draws += 1,
        }
    }
}

/// Plays one game to the end and returns its outcome.
#[instrument(skip(rng))]
pub fn play_random_game<R: RandomSource>(rng: &mut R) -> GameOutcome {
    let mut session = GameSession::new();
    while !session.is_over() {
        let moves = Position::valid_moves(session.board());
        let Some(pos) = rng.choose(&moves) else {
            break;
        };
        session.play_turn(pos.to_index(), rng);
    }
    let outcome = session.outcome();
    debug!(
        ?outcome,
        moves = session.history().len(),
        board = %session.board().display(),
        "Simulated game finished"
    );
    outcome
}

/// Plays `games` games and tallies the outcomes.
#[instrument(skip(rng))]
pub fn simulate<R: RandomSource>(games: usize, rng: &mut R) -> SimulationReport {
    let mut report = SimulationReport::default();
    for _ in 0..games {
        report.record(play_random_game(rng));
    }
    info!(%report, "Simulation complete");
    report
}
