//! Roll source trait and the stock variants.

use smallvec::SmallVec;

use crate::core::{GameError, GameResult, GameRng, RollKind};

/// Produces die values, one per call.
///
/// Implementations never fail. Values from a [`RollKind::Single`] source
/// are validated by the consumer, not here.
pub trait RollSource {
    /// Produce the next value.
    fn shake(&mut self) -> u32;

    /// Shape of the values this source produces.
    fn kind(&self) -> RollKind {
        RollKind::Single
    }

    /// Rolls counted by a [`CountingRollSource`](super::CountingRollSource)
    /// somewhere in this source's wrapper chain, or `None` if uncounted.
    fn rolls_counted(&self) -> Option<u64> {
        None
    }
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn shake(&mut self) -> u32 {
        (**self).shake()
    }

    fn kind(&self) -> RollKind {
        (**self).kind()
    }

    fn rolls_counted(&self) -> Option<u64> {
        (**self).rolls_counted()
    }
}

impl<R: RollSource + ?Sized> RollSource for Box<R> {
    fn shake(&mut self) -> u32 {
        (**self).shake()
    }

    fn kind(&self) -> RollKind {
        (**self).kind()
    }

    fn rolls_counted(&self) -> Option<u64> {
        (**self).rolls_counted()
    }
}

/// Cycles through a fixed table of values, wrapping at the end.
///
/// ```
/// use rust_dicegame::dice::{FixedSequence, RollSource};
///
/// let mut dice = FixedSequence::default();
/// let rolls: Vec<_> = (0..7).map(|_| dice.shake()).collect();
/// assert_eq!(rolls, vec![1, 2, 3, 4, 5, 6, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedSequence {
    values: SmallVec<[u32; 6]>,
    cursor: usize,
}

impl FixedSequence {
    /// Create a sequence over `values`. The table must not be empty.
    pub fn new(values: impl IntoIterator<Item = u32>) -> GameResult<Self> {
        let values: SmallVec<[u32; 6]> = values.into_iter().collect();
        if values.is_empty() {
            return Err(GameError::EmptySequence);
        }
        Ok(Self { values, cursor: 0 })
    }

    /// The table being cycled.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Rewind to the first value.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl Default for FixedSequence {
    fn default() -> Self {
        Self {
            values: SmallVec::from_buf([1, 2, 3, 4, 5, 6]),
            cursor: 0,
        }
    }
}

impl RollSource for FixedSequence {
    fn shake(&mut self) -> u32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

/// One fair six-sided die.
#[derive(Clone, Debug)]
pub struct SingleUniform {
    rng: GameRng,
}

impl SingleUniform {
    /// Roll using the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Roll using a fresh RNG seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Default for SingleUniform {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl RollSource for SingleUniform {
    fn shake(&mut self) -> u32 {
        self.rng.roll_die()
    }
}

/// Two fair dice, summed.
///
/// Each die draws from its own stream forked off the seed RNG.
#[derive(Clone, Debug)]
pub struct DoubleUniform {
    first: SingleUniform,
    second: SingleUniform,
}

impl DoubleUniform {
    /// Roll using two streams forked from `rng`.
    #[must_use]
    pub fn new(mut rng: GameRng) -> Self {
        Self {
            first: SingleUniform::new(rng.fork()),
            second: SingleUniform::new(rng.fork()),
        }
    }

    /// Roll using a fresh RNG seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Default for DoubleUniform {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl RollSource for DoubleUniform {
    fn shake(&mut self) -> u32 {
        self.first.shake() + self.second.shake()
    }

    fn kind(&self) -> RollKind {
        RollKind::Double
    }
}
