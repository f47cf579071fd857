//! Injectable randomness for game decisions.
//!
//! Every game draws through [`RandomSource`] so tests and replays can supply a
//! fixed sequence. Any [`rand::RngCore`] is a source; the hub runs on a
//! [`ArenaRng`] seeded from entropy or from `--seed`.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Generator used by the hub and the simulator.
pub type ArenaRng = ChaCha8Rng;

/// Creates the hub generator, deterministic when a seed is given.
pub fn arena_rng(seed: Option<u64>) -> ArenaRng {
    match seed {
        Some(seed) => ArenaRng::seed_from_u64(seed),
        None => ArenaRng::from_entropy(),
    }
}

/// Source of uniform index choices.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Picks one element uniformly, `None` for an empty slice.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        Some(items[self.pick_index(items.len())])
    }

    /// Fisher-Yates shuffle in place.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.pick_index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RngCore> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices.
///
/// Each scripted value is reduced modulo the requested length; once the
/// script runs out every pick returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
}

impl ScriptedSource {
    /// Creates a source that yields `script` in order.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.script.pop_front().map_or(0, |v| v % len)
    }
}
