//! The games on offer, in carousel order.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// One of the hub's mini-games.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum GameKind {
    /// Guess the face of one die.
    #[display("Dice Roll")]
    DiceRoll,
    /// Open boxes and dodge the bomb.
    #[display("Mystery Box")]
    MysteryBox,
    /// Rock, paper, scissors against the computer.
    #[display("Rock, Paper, Scissors")]
    RockPaperScissors,
    /// Find all pairs of cards.
    #[display("Memory Match")]
    MemoryMatch,
    /// Tic-tac-toe against the heuristic opponent.
    #[display("Tic-Tac-Toe")]
    TicTacToe,
}

impl GameKind {
    /// Every game in carousel order.
    pub fn all() -> Vec<GameKind> {
        GameKind::iter().collect()
    }

    /// Banner title.
    pub fn title(self) -> &'static str {
        match self {
            GameKind::DiceRoll => "DICE ROLL",
            GameKind::MysteryBox => "MYSTERY BOX",
            GameKind::RockPaperScissors => "ROCK, PAPER, SCISSORS",
            GameKind::MemoryMatch => "MEMORY MATCH",
            GameKind::TicTacToe => "TIC-TAC-TOE",
        }
    }

    /// One-line pitch.
    pub fn description(self) -> &'static str {
        match self {
            GameKind::DiceRoll => "Test your luck against the odds. Roll the dice and win big!",
            GameKind::MysteryBox => {
                "Open a mysterious box and discover what lies inside. Luck is your only guide."
            }
            GameKind::RockPaperScissors => {
                "Challenge the computer to a classic game of strategy and luck."
            }
            GameKind::MemoryMatch => "Test your memory skills. Match all the pairs!",
            GameKind::TicTacToe => "The classic game. Play against the computer.",
        }
    }

    /// Rules, one line each.
    pub fn how_to_play(self) -> &'static [&'static str] {
        match self {
            GameKind::DiceRoll => &[
                "Press 1-6 to guess a face, then Enter to roll.",
                "If the die shows your guess, you win 0.001 APT.",
                "Good luck, adventurer.",
            ],
            GameKind::MysteryBox => &[
                "Move with the arrows and press Enter to open a box.",
                "One of the 25 boxes hides a bomb.",
                "Open all 24 safe boxes to win.",
            ],
            GameKind::RockPaperScissors => &[
                "Press r, p or s to throw rock, paper or scissors.",
                "Rock crushes scissors, scissors cuts paper, and paper covers rock.",
                "Beat the computer to win 0.001 APT.",
            ],
            GameKind::MemoryMatch => &[
                "Move with the arrows and press Enter to turn a card.",
                "Turn a second card to find its pair. Pairs stay face up.",
                "Cards that do not match turn back over. Match all pairs to win.",
            ],
            GameKind::TicTacToe => &[
                "Press 1-9 or move with the arrows and Enter to place your X.",
                "The first side to get three in a row wins.",
                "If the board is full and no one has won, it is a draw.",
            ],
        }
    }

    /// Whether a win sends a token reward.
    pub fn pays_reward(self) -> bool {
        matches!(self, GameKind::DiceRoll | GameKind::RockPaperScissors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        assert_eq!(
            GameKind::all(),
            vec![
                GameKind::DiceRoll,
                GameKind::MysteryBox,
                GameKind::RockPaperScissors,
                GameKind::MemoryMatch,
                GameKind::TicTacToe,
            ]
        );
    }

    #[test]
    fn test_only_dice_and_rps_pay() {
        let paying: Vec<_> = GameKind::iter().filter(|g| g.pays_reward()).collect();
        assert_eq!(paying, vec![GameKind::DiceRoll, GameKind::RockPaperScissors]);
    }

    #[test]
    fn test_every_game_has_rules() {
        for game in GameKind::iter() {
            assert_eq!(game.how_to_play().len(), 3, "{game}");
            assert!(!game.description().is_empty());
        }
    }
}
