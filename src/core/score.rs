//! Immutable, non-negative score.
//!
//! Every arithmetic operation produces a new `Score`; the original is never
//! modified. Negative construction values and negative addends are rejected
//! rather than clamped.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// A non-negative game score.
///
/// ```
/// use rust_dicegame::core::Score;
///
/// let score = Score::new(10).unwrap();
/// assert_eq!(score.add(4).unwrap(), Score::new(14).unwrap());
/// assert!(Score::new(-1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u64);

impl Score {
    /// The starting score of every session.
    pub const ZERO: Score = Score(0);

    /// Create a score, rejecting negative values.
    pub fn new(value: i64) -> GameResult<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| GameError::NegativeScore { value })
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Return a new score increased by `amount`.
    ///
    /// Fails on a negative amount or on overflow; `self` is unchanged either way.
    pub fn add(self, amount: i64) -> GameResult<Self> {
        let amount = u64::try_from(amount).map_err(|_| GameError::NegativeAmount { amount })?;
        self.0
            .checked_add(amount)
            .map(Self)
            .ok_or(GameError::ScoreOverflow)
    }

    /// Return a new score increased by a non-negative number of points.
    ///
    /// Total over all inputs, which is what the scoring strategies need.
    /// The sum saturates at `u64::MAX`; reaching it takes more than 10^18
    /// maximum-value rolls, so no real game is ever clamped. Use
    /// [`add`](Self::add) where overflow must be reported.
    pub const fn credit(self, points: u32) -> Self {
        Self(self.0.saturating_add(points as u64))
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
