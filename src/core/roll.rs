//! Roll values.
//!
//! A single die yields a [`DiceRoll`], validated to 1..=6. A pair of dice
//! yields an unvalidated sum that is carried as [`Roll::Double`] and applied
//! to the score as a raw delta.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Shape of the values a roll source produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollKind {
    /// One die, 1..=6.
    #[default]
    Single,
    /// Sum of two dice, 2..=12.
    Double,
}

/// A validated single-die value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DiceRoll(u8);

impl DiceRoll {
    /// Lowest face.
    pub const MIN: u32 = 1;
    /// Highest face.
    pub const MAX: u32 = 6;

    /// Wrap a die value, rejecting anything outside 1..=6.
    pub fn new(value: u32) -> GameResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(GameError::RollOutOfRange { value })
        }
    }

    /// Get the face value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }

    /// Did the die land on its highest face?
    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 as u32 == Self::MAX
    }

    /// Is the face value even?
    #[must_use]
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

impl TryFrom<u32> for DiceRoll {
    type Error = GameError;

    fn try_from(value: u32) -> GameResult<Self> {
        Self::new(value)
    }
}

impl From<DiceRoll> for u32 {
    fn from(roll: DiceRoll) -> Self {
        roll.value()
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A roll as seen by a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Roll {
    /// Validated single die.
    Single(DiceRoll),
    /// Raw two-dice sum.
    Double(u32),
}

impl Roll {
    /// Wrap a raw value according to the kind of source that produced it.
    ///
    /// Single values are validated; double sums are taken as-is.
    pub fn from_raw(kind: RollKind, value: u32) -> GameResult<Self> {
        match kind {
            RollKind::Single => DiceRoll::new(value).map(Roll::Single),
            RollKind::Double => Ok(Roll::Double(value)),
        }
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Roll::Single(roll) => roll.value(),
            Roll::Double(total) => total,
        }
    }

    /// Get the kind of this roll.
    #[must_use]
    pub const fn kind(self) -> RollKind {
        match self {
            Roll::Single(_) => RollKind::Single,
            Roll::Double(_) => RollKind::Double,
        }
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
