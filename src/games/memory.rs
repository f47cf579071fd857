//! Memory match: flip two cards at a time and find all eight pairs.

use crate::random::RandomSource;
use tracing::{debug, info, instrument};

/// Faces on the cards, each used twice.
pub const SYMBOLS: [&str; 8] = ["👻", "👾", "👽", "🤖", "👑", "🔮", "⚔", "🛡"];

/// Total cards on the table.
pub const CARD_COUNT: usize = SYMBOLS.len() * 2;

/// Cards per table row.
pub const GRID_WIDTH: usize = 4;

/// One card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Index into [`SYMBOLS`].
    pub symbol: usize,
    /// Face up right now.
    pub flipped: bool,
    /// Part of a found pair.
    pub matched: bool,
}

impl Card {
    /// The face glyph.
    pub fn glyph(&self) -> &'static str {
        SYMBOLS[self.symbol]
    }

    /// Whether the face is showing.
    pub fn face_up(&self) -> bool {
        self.flipped || self.matched
    }
}

/// What a flip did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipResult {
    /// Card unavailable or a mismatch still showing.
    Ignored,
    /// First card of a pair turned over.
    Revealed,
    /// Second card matched the first.
    Matched,
    /// Second card matched the first and that was the last pair.
    Cleared,
    /// Second card differs; both stay up until
    /// [`MemoryGame::conceal_mismatch`].
    Mismatch,
}

/// A shuffled table of sixteen cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryGame {
    cards: Vec<Card>,
    pending: Option<usize>,
    mismatch: Option<(usize, usize)>,
    matches: usize,
}

impl MemoryGame {
    /// Deals a shuffled table.
    #[instrument(skip(rng))]
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let mut symbols: Vec<usize> = (0..SYMBOLS.len()).chain(0..SYMBOLS.len()).collect();
        rng.shuffle(&mut symbols);
        Self::from_symbols(&symbols)
    }

    /// Deals the given layout as-is.
    pub fn from_symbols(symbols: &[usize]) -> Self {
        let cards = symbols
            .iter()
            .map(|&symbol| Card {
                symbol: symbol % SYMBOLS.len(),
                flipped: false,
                matched: false,
            })
            .collect();
        Self {
            cards,
            pending: None,
            mismatch: None,
            matches: 0,
        }
    }

    /// The table in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Pairs found.
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Whether a mismatch is waiting to be turned back.
    pub fn is_locked(&self) -> bool {
        self.mismatch.is_some()
    }

    /// Whether every pair was found.
    pub fn is_won(&self) -> bool {
        self.matches == SYMBOLS.len()
    }

    /// Turns card `id` face up.
    #[instrument(skip(self))]
    pub fn flip(&mut self, id: usize) -> FlipResult {
        if self.is_locked() || self.is_won() {
            return FlipResult::Ignored;
        }
        let Some(card) = self.cards.get(id) else {
            return FlipResult::Ignored;
        };
        if card.face_up() {
            return FlipResult::Ignored;
        }
        self.cards[id].flipped = true;

        let Some(first) = self.pending.take() else {
            debug!(id, "First card up");
            self.pending = Some(id);
            return FlipResult::Revealed;
        };

        if self.cards[first].symbol == self.cards[id].symbol {
            for i in [first, id] {
                self.cards[i].matched = true;
                self.cards[i].flipped = false;
            }
            self.matches += 1;
            info!(first, second = id, matches = self.matches, "Pair found");
            if self.is_won() {
                FlipResult::Cleared
            } else {
                FlipResult::Matched
            }
        } else {
            debug!(first, second = id, "Mismatch");
            self.mismatch = Some((first, id));
            FlipResult::Mismatch
        }
    }

    /// Turns a showing mismatch face down again. Returns whether one was
    /// showing.
    pub fn conceal_mismatch(&mut self) -> bool {
        let Some((a, b)) = self.mismatch.take() else {
            return false;
        };
        self.cards[a].flipped = false;
        self.cards[b].flipped = false;
        true
    }

    /// Reshuffles and deals a new table.
    pub fn reset<R: RandomSource>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    fn ordered() -> MemoryGame {
        let symbols: Vec<usize> = (0..8).flat_map(|s| [s, s]).collect();
        MemoryGame::from_symbols(&symbols)
    }

    #[test]
    fn test_deal_has_every_pair() {
        let game = MemoryGame::new(&mut ScriptedSource::new([3, 9, 1, 14, 0, 6]));
        assert_eq!(game.cards().len(), CARD_COUNT);
        for symbol in 0..SYMBOLS.len() {
            assert_eq!(game.cards().iter().filter(|c| c.symbol == symbol).count(), 2);
        }
    }

    #[test]
    fn test_mismatch_locks_until_concealed() {
        let mut game = ordered();
        assert_eq!(game.flip(0), FlipResult::Revealed);
        assert_eq!(game.flip(2), FlipResult::Mismatch);
        assert!(game.is_locked());
        assert_eq!(game.flip(1), FlipResult::Ignored);
        assert!(game.conceal_mismatch());
        assert!(!game.cards()[0].face_up());
        assert_eq!(game.flip(1), FlipResult::Revealed);
    }

    #[test]
    fn test_same_card_twice_ignored() {
        let mut game = ordered();
        game.flip(4);
        assert_eq!(game.flip(4), FlipResult::Ignored);
    }

    #[test]
    fn test_all_pairs_clear() {
        let mut game = ordered();
        for pair in 0..7 {
            game.flip(pair * 2);
            assert_eq!(game.flip(pair * 2 + 1), FlipResult::Matched);
        }
        game.flip(14);
        assert_eq!(game.flip(15), FlipResult::Cleared);
        assert!(game.is_won());
        assert_eq!(game.flip(0), FlipResult::Ignored);
    }
}
