//! Deterministic random number generation for play resolution.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Forkable**: Independent streams for separate decision makers
//! - **Serializable**: O(1) state capture and restore
//! - **Scriptable**: `ScriptedRng` replays fixed draws
//!
//! Everything random in the engine (play calls, yardage, turnovers, clock
//! runoff) goes through the [`PlayRng`] trait, so any source can be injected.
//!
//! ```
//! use rust_gridiron::core::{GameRng, PlayRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(-5..=40), b.roll(-5..=40));
//! ```

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of every random decision the engine makes.
pub trait PlayRng {
    /// Uniform integer in the inclusive range.
    fn roll(&mut self, range: RangeInclusive<i32>) -> i32;

    /// `true` with the given probability (in `[0, 1]`).
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Choose a random element from a slice.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if slice.is_empty() {
            None
        } else {
            slice.get(self.pick(slice.len()))
        }
    }
}

impl<R: PlayRng + ?Sized> PlayRng for &mut R {
    fn roll(&mut self, range: RangeInclusive<i32>) -> i32 {
        (**self).roll(range)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl PlayRng for GameRng {
    fn roll(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Lets a session store persist the stream next to the `GameState` and resume
/// the same sequence later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// A `PlayRng` that replays queued draws.
///
/// When a queue runs dry the source falls back to the low end: `roll` returns
/// the range start, `chance` returns `false`, `pick` returns 0. Queued rolls
/// are clamped into the requested range.
///
/// ```
/// use rust_gridiron::core::{PlayRng, ScriptedRng};
///
/// let mut rng = ScriptedRng::new().with_rolls([12, 99]).with_chances([true]);
/// assert_eq!(rng.roll(0..=20), 12);
/// assert_eq!(rng.roll(0..=20), 20);
/// assert!(rng.chance(0.15));
/// assert!(!rng.chance(0.15));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    rolls: VecDeque<i32>,
    chances: VecDeque<bool>,
    picks: VecDeque<usize>,
}

impl ScriptedRng {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue values returned by `roll`.
    #[must_use]
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue values returned by `chance`.
    #[must_use]
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Queue values returned by `pick`.
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Number of queued draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len() + self.chances.len() + self.picks.len()
    }
}

impl PlayRng for ScriptedRng {
    fn roll(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (lo, hi) = range.into_inner();
        self.rolls.pop_front().map_or(lo, |v| v.clamp(lo, hi))
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks
            .pop_front()
            .map_or(0, |i| i.min(len.saturating_sub(1)))
    }
}
