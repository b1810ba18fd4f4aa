//! Building roll sources from a [`DiceKind`].

use tracing::{debug, info};

use crate::core::{DiceKind, GameConfig, GameRng};

use super::decorator::{CountingRollSource, LoggingRollSource};
use super::source::{DoubleUniform, FixedSequence, RollSource, SingleUniform};

/// Creates boxed roll sources and counts how many it has made.
///
/// With a seed, every random source it creates draws from a distinct
/// stream forked off that seed, so a seeded factory reproduces the same
/// games in the same order.
#[derive(Clone, Debug)]
pub struct DiceFactory {
    rng: GameRng,
    created: u32,
}

impl DiceFactory {
    /// Create a factory, seeded if `seed` is given.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self { rng, created: 0 }
    }

    /// Create a bare source of the given kind.
    pub fn create(&mut self, kind: DiceKind) -> Box<dyn RollSource> {
        self.created += 1;
        debug!(created = self.created, description = kind.description(), "creating roll source");

        match kind {
            DiceKind::Fixed => Box::new(FixedSequence::default()),
            DiceKind::Single => Box::new(SingleUniform::new(self.rng.fork())),
            DiceKind::Double => Box::new(DoubleUniform::new(self.rng.fork())),
        }
    }

    /// Create the source described by `config`, wrapped as requested.
    ///
    /// Logging sits inside counting, so the count covers logged rolls.
    pub fn build(&mut self, config: &GameConfig) -> Box<dyn RollSource> {
        let mut source = self.create(config.dice);
        if config.log_rolls {
            source = Box::new(LoggingRollSource::new(source));
        }
        if config.count_rolls {
            source = Box::new(CountingRollSource::new(source));
        }
        info!(dice = %config.dice, counted = config.count_rolls, logged = config.log_rolls, "roll source ready");
        source
    }

    /// Number of sources this factory has created.
    #[must_use]
    pub fn created(&self) -> u32 {
        self.created
    }
}

impl Default for DiceFactory {
    fn default() -> Self {
        Self::new(None)
    }
}
