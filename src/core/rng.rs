//! Randomness for the turn engine.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Pluggable**: The engine only sees the [`RandomSource`] trait
//! - **Scriptable**: [`ScriptedSource`] fixes the action-point draws for tests
//!
//! ## Usage
//!
//! ```
//! use castle_clash::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let points = rng1.action_points();
//! assert!((1..=6).contains(&points));
//! assert_eq!(points, rng2.action_points());
//! ```

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Coord;

/// Inclusive range every action-point draw falls in.
pub const ACTION_POINTS_RANGE: RangeInclusive<u32> = 1..=6;

/// Source of the engine's random decisions.
///
/// Implementations must return action points inside [`ACTION_POINTS_RANGE`]
/// and coordinates inside a `size × size` board.
pub trait RandomSource {
    /// Draw a fresh action-point budget.
    fn action_points(&mut self) -> u32;

    /// Pick a uniformly random coordinate on a `size × size` board.
    fn coordinate(&mut self, size: u16) -> Coord;
}

/// Deterministic RNG for the engine.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Generate a random index in `0..len`.
    pub fn gen_index(&mut self, len: u16) -> u16 {
        self.inner.gen_range(0..len)
    }
}

impl RandomSource for GameRng {
    fn action_points(&mut self) -> u32 {
        self.gen_range(ACTION_POINTS_RANGE)
    }

    fn coordinate(&mut self, size: u16) -> Coord {
        let row = self.gen_index(size);
        let col = self.gen_index(size);
        Coord::new(row, col)
    }
}

/// Random source with a fixed queue of action-point draws.
///
/// Draws are served from the queue in order; once it runs dry the inner
/// `GameRng` takes over. Coordinates always come from the inner RNG.
///
/// ```
/// use castle_clash::core::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new([3, 6], 7);
/// assert_eq!(source.action_points(), 3);
/// assert_eq!(source.action_points(), 6);
/// assert!((1..=6).contains(&source.action_points()));
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    points: VecDeque<u32>,
    fallback: GameRng,
}

impl ScriptedSource {
    /// Create a source replaying `points`, backed by an RNG seeded with `seed`.
    ///
    /// Values are clamped into [`ACTION_POINTS_RANGE`].
    pub fn new(points: impl IntoIterator<Item = u32>, seed: u64) -> Self {
        let (min, max) = (*ACTION_POINTS_RANGE.start(), *ACTION_POINTS_RANGE.end());
        Self {
            points: points.into_iter().map(|p| p.clamp(min, max)).collect(),
            fallback: GameRng::new(seed),
        }
    }

    /// Queue more draws behind the remaining ones.
    pub fn push(&mut self, points: u32) {
        let (min, max) = (*ACTION_POINTS_RANGE.start(), *ACTION_POINTS_RANGE.end());
        self.points.push_back(points.clamp(min, max));
    }

    /// Number of scripted draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.points.len()
    }
}

impl RandomSource for ScriptedSource {
    fn action_points(&mut self) -> u32 {
        match self.points.pop_front() {
            Some(points) => points,
            None => self.fallback.action_points(),
        }
    }

    fn coordinate(&mut self, size: u16) -> Coord {
        self.fallback.coordinate(size)
    }
}
