//! Dice roll: guess a face, roll one die, win on a match.

use super::RoundResult;
use crate::random::RandomSource;
use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Number of faces on the die.
pub const FACES: u8 = 6;

/// A guess that is not a face of the die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Guess {} is not a die face (1-{})", value, FACES)]
pub struct GuessError {
    /// The rejected guess.
    pub value: u8,
}

/// Compares a guess with a roll.
pub fn resolve(guess: u8, roll: u8) -> RoundResult {
    if guess == roll {
        RoundResult::Win
    } else {
        RoundResult::Lose
    }
}

/// One finished roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    /// Face that came up.
    pub value: u8,
    /// Win or lose against the guess.
    pub result: RoundResult,
}

/// State of a dice round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct DiceGame {
    #[getter(rename = "current_guess")]
    guess: Option<u8>,
    last_roll: Option<DiceRoll>,
}

impl DiceGame {
    /// Creates a round with no guess.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a guess and clears any previous roll.
    #[instrument(skip(self))]
    pub fn guess(&mut self, value: u8) -> Result<(), GuessError> {
        if !(1..=FACES).contains(&value) {
            return Err(GuessError { value });
        }
        debug!(value, "Guess recorded");
        self.guess = Some(value);
        self.last_roll = None;
        Ok(())
    }

    /// Whether a roll would be accepted now.
    pub fn can_roll(&self) -> bool {
        self.guess.is_some() && self.last_roll.is_none()
    }

    /// Rolls the die. Ignored without a guess or once the round is settled.
    #[instrument(skip(self, rng))]
    pub fn roll<R: RandomSource>(&mut self, rng: &mut R) -> Option<DiceRoll> {
        if !self.can_roll() {
            return None;
        }
        let guess = self.guess?;
        let value = rng.pick_index(usize::from(FACES)) as u8 + 1;
        let roll = DiceRoll {
            value,
            result: resolve(guess, value),
        };
        info!(guess, value, result = ?roll.result, "Dice rolled");
        self.last_roll = Some(roll);
        Some(roll)
    }

    /// Clears guess and result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    #[test]
    fn test_guess_out_of_range() {
        let mut game = DiceGame::new();
        assert_eq!(game.guess(0), Err(GuessError { value: 0 }));
        assert_eq!(game.guess(7), Err(GuessError { value: 7 }));
        assert_eq!(*game.current_guess(), None);
    }

    #[test]
    fn test_roll_requires_guess() {
        let mut game = DiceGame::new();
        let mut rng = ScriptedSource::new([0]);
        assert!(game.roll(&mut rng).is_none());
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_matching_roll_wins_once() {
        let mut game = DiceGame::new();
        game.guess(3).unwrap();
        let mut rng = ScriptedSource::new([2, 2]);
        let roll = game.roll(&mut rng).unwrap();
        assert_eq!(roll, DiceRoll { value: 3, result: RoundResult::Win });
        assert!(game.roll(&mut rng).is_none(), "settled round ignores rolls");
    }

    #[test]
    fn test_new_guess_reopens_round() {
        let mut game = DiceGame::new();
        game.guess(6).unwrap();
        let mut rng = ScriptedSource::new([0, 5]);
        assert_eq!(game.roll(&mut rng).unwrap().result, RoundResult::Lose);
        game.guess(6).unwrap();
        assert_eq!(game.roll(&mut rng).unwrap().result, RoundResult::Win);
    }
}
