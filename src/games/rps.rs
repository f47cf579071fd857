//! Rock, paper, scissors against a uniformly random computer.

use super::RoundResult;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

/// A hand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum Choice {
    /// Crushes scissors.
    Rock,
    /// Covers rock.
    Paper,
    /// Cuts paper.
    Scissors,
}

impl Choice {
    /// The hand this one defeats.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Single-letter key used by the hub.
    pub fn key(self) -> char {
        match self {
            Choice::Rock => 'r',
            Choice::Paper => 'p',
            Choice::Scissors => 's',
        }
    }

    /// Parses a hub key.
    pub fn from_key(key: char) -> Option<Choice> {
        Choice::iter().find(|c| c.key() == key.to_ascii_lowercase())
    }
}

/// Scores the player's hand against the computer's.
pub fn resolve(player: Choice, computer: Choice) -> RoundResult {
    if player == computer {
        RoundResult::Draw
    } else if player.beats() == computer {
        RoundResult::Win
    } else {
        RoundResult::Lose
    }
}

/// Where the round is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpsPhase {
    /// Waiting for a hand.
    Idle,
    /// Player committed; the computer is "thinking".
    Choosing,
    /// The computer hand is being revealed.
    Revealing,
    /// Both hands shown and scored.
    Done(RoundResult),
}

/// One round of rock, paper, scissors.
///
/// The computer hand is drawn when the player commits but stays hidden until
/// [`RpsRound::reveal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpsRound {
    phase: RpsPhase,
    player: Option<Choice>,
    computer: Option<Choice>,
}

impl RpsRound {
    /// A fresh round.
    pub fn new() -> Self {
        Self {
            phase: RpsPhase::Idle,
            player: None,
            computer: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RpsPhase {
        self.phase
    }

    /// The player's hand, once chosen.
    pub fn player(&self) -> Option<Choice> {
        self.player
    }

    /// The computer's hand, visible only after the reveal.
    pub fn computer(&self) -> Option<Choice> {
        match self.phase {
            RpsPhase::Done(_) => self.computer,
            _ => None,
        }
    }

    /// Commits the player's hand. Ignored while a round is in flight.
    #[instrument(skip(self, rng))]
    pub fn choose<R: RandomSource>(&mut self, player: Choice, rng: &mut R) -> bool {
        if matches!(self.phase, RpsPhase::Choosing | RpsPhase::Revealing) {
            debug!("Round in flight, ignoring");
            return false;
        }
        let hands: Vec<Choice> = Choice::iter().collect();
        self.player = Some(player);
        self.computer = rng.choose(&hands);
        self.phase = RpsPhase::Choosing;
        true
    }

    /// Moves from choosing to revealing.
    pub fn start_reveal(&mut self) -> bool {
        if self.phase != RpsPhase::Choosing {
            return false;
        }
        self.phase = RpsPhase::Revealing;
        true
    }

    /// Shows the computer hand and scores the round.
    #[instrument(skip(self))]
    pub fn reveal(&mut self) -> Option<RoundResult> {
        if !matches!(self.phase, RpsPhase::Choosing | RpsPhase::Revealing) {
            return None;
        }
        let (player, computer) = (self.player?, self.computer?);
        let result = resolve(player, computer);
        info!(%player, %computer, ?result, "Round revealed");
        self.phase = RpsPhase::Done(result);
        Some(result)
    }

    /// Back to idle with no hands.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RpsRound {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    #[test]
    fn test_resolve_table() {
        for hand in Choice::iter() {
            assert_eq!(resolve(hand, hand), RoundResult::Draw);
            assert_eq!(resolve(hand, hand.beats()), RoundResult::Win);
            assert_eq!(resolve(hand.beats(), hand), RoundResult::Lose);
        }
    }

    #[test]
    fn test_round_phases() {
        let mut round = RpsRound::new();
        // Computer draws Scissors (index 2).
        let mut rng = ScriptedSource::new([2]);
        assert!(round.choose(Choice::Rock, &mut rng));
        assert_eq!(round.computer(), None);
        assert!(!round.choose(Choice::Paper, &mut rng), "locked while choosing");
        assert_eq!(round.phase(), RpsPhase::Choosing);
        assert!(round.start_reveal());
        assert_eq!(round.phase(), RpsPhase::Revealing);
        assert_eq!(round.reveal(), Some(RoundResult::Win));
        assert_eq!(round.phase(), RpsPhase::Done(RoundResult::Win));
        assert_eq!(round.computer(), Some(Choice::Scissors));
        assert_eq!(round.reveal(), None);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(Choice::from_key('R'), Some(Choice::Rock));
        assert_eq!(Choice::from_key('s'), Some(Choice::Scissors));
        assert_eq!(Choice::from_key('x'), None);
    }
}
