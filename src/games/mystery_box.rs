//! Mystery box: open boxes one at a time and avoid the single bomb.

use super::RoundResult;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of boxes on the grid.
pub const BOX_COUNT: usize = 25;

/// Boxes per grid row.
pub const GRID_WIDTH: usize = 5;

/// Round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxStatus {
    /// Boxes may still be opened.
    Playing,
    /// Every safe box was opened.
    Won,
    /// The bomb was opened.
    Lost,
}

impl BoxStatus {
    /// Round result once the round is over.
    pub fn result(self) -> Option<RoundResult> {
        match self {
            BoxStatus::Playing => None,
            BoxStatus::Won => Some(RoundResult::Win),
            BoxStatus::Lost => Some(RoundResult::Lose),
        }
    }
}

/// What opening a box did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenResult {
    /// Off the grid, already open, or the round is over.
    Ignored,
    /// A safe box; the round continues.
    Safe,
    /// The last safe box; the round is won.
    Cleared,
    /// The bomb.
    Bomb,
}

/// A 5x5 grid hiding one bomb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MysteryBoxGame {
    bomb: usize,
    opened: [bool; BOX_COUNT],
    status: BoxStatus,
}

impl MysteryBoxGame {
    /// Hides the bomb under a random box.
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        Self::with_bomb(rng.pick_index(BOX_COUNT))
    }

    /// Places the bomb under `bomb`, wrapped onto the grid.
    pub fn with_bomb(bomb: usize) -> Self {
        Self {
            bomb: bomb % BOX_COUNT,
            opened: [false; BOX_COUNT],
            status: BoxStatus::Playing,
        }
    }

    /// Current status.
    pub fn status(&self) -> BoxStatus {
        self.status
    }

    /// Whether box `id` has been opened.
    pub fn is_open(&self, id: usize) -> bool {
        self.opened.get(id).copied().unwrap_or(false)
    }

    /// Where the bomb is. Shown once the round is over.
    pub fn bomb(&self) -> usize {
        self.bomb
    }

    /// Safe boxes opened so far.
    pub fn safe_opened(&self) -> usize {
        self.opened
            .iter()
            .enumerate()
            .filter(|(id, open)| **open && *id != self.bomb)
            .count()
    }

    /// Opens box `id`.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn open(&mut self, id: usize) -> OpenResult {
        if self.status != BoxStatus::Playing || id >= BOX_COUNT || self.opened[id] {
            debug!("Ignoring box");
            return OpenResult::Ignored;
        }
        self.opened[id] = true;

        if id == self.bomb {
            info!(id, "Bomb opened");
            self.status = BoxStatus::Lost;
            return OpenResult::Bomb;
        }

        if self.safe_opened() == BOX_COUNT - 1 {
            info!("All safe boxes opened");
            self.status = BoxStatus::Won;
            OpenResult::Cleared
        } else {
            debug!(id, opened = self.safe_opened(), "Safe box");
            OpenResult::Safe
        }
    }

    /// Closes every box and hides the bomb again.
    pub fn reset<R: RandomSource>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    #[test]
    fn test_bomb_ends_round() {
        let mut game = MysteryBoxGame::with_bomb(7);
        assert_eq!(game.open(0), OpenResult::Safe);
        assert_eq!(game.open(7), OpenResult::Bomb);
        assert_eq!(game.status(), BoxStatus::Lost);
        assert_eq!(game.open(1), OpenResult::Ignored);
    }

    #[test]
    fn test_clearing_every_safe_box_wins() {
        let mut game = MysteryBoxGame::with_bomb(24);
        for id in 0..23 {
            assert_eq!(game.open(id), OpenResult::Safe);
        }
        assert_eq!(game.open(23), OpenResult::Cleared);
        assert_eq!(game.status().result(), Some(RoundResult::Win));
    }

    #[test]
    fn test_reopen_and_off_grid_ignored() {
        let mut game = MysteryBoxGame::with_bomb(0);
        assert_eq!(game.open(3), OpenResult::Safe);
        assert_eq!(game.open(3), OpenResult::Ignored);
        assert_eq!(game.open(BOX_COUNT), OpenResult::Ignored);
        assert_eq!(game.safe_opened(), 1);
    }

    #[test]
    fn test_reset_rehides_bomb() {
        let mut rng = ScriptedSource::new([12]);
        let mut game = MysteryBoxGame::with_bomb(0);
        game.open(0);
        game.reset(&mut rng);
        assert_eq!(game.status(), BoxStatus::Playing);
        assert_eq!(game.bomb(), 12);
        assert!(!game.is_open(0));
    }
}
