//! Deterministic random number generation for dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Forkable**: Independent streams for each die of a pair
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_dicegame::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::roll::DiceRoll;

/// Seeded RNG backing the random roll sources.
///
/// Uses ChaCha8 so a recorded seed reproduces a whole game.
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

    /// Create an RNG seeded from the thread-local entropy source.
    ///
    /// The chosen seed is still recorded, so `state()` works as usual.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic branch.
    ///
    /// The child seed is a splitmix64 mix of the parent seed and fork
    /// counter, so a child's own forks do not land on its siblings' seeds.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(splitmix64(self.seed ^ splitmix64(self.fork_counter)))
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Roll one fair die.
    pub fn roll_die(&mut self) -> u32 {
        self.gen_range(DiceRoll::MIN..=DiceRoll::MAX)
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

fn splitmix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
