//! Strategy trait and the stock scoring rules.

use crate::core::{DiceRoll, Roll, Score, ScoringKind};

/// Pure scoring rule.
pub trait ScoringStrategy {
    /// Compute the score after `roll`.
    fn calculate(&self, current: Score, roll: DiceRoll) -> Score;

    /// Apply any roll to a score.
    ///
    /// Single rolls go through [`calculate`](Self::calculate). A two-dice
    /// sum is not a die face, so it is added as-is.
    fn apply(&self, current: Score, roll: Roll) -> Score {
        match roll {
            Roll::Single(roll) => self.calculate(current, roll),
            Roll::Double(total) => current.credit(total),
        }
    }
}

impl<S: ScoringStrategy + ?Sized> ScoringStrategy for &S {
    fn calculate(&self, current: Score, roll: DiceRoll) -> Score {
        (**self).calculate(current, roll)
    }
}

impl<S: ScoringStrategy + ?Sized> ScoringStrategy for Box<S> {
    fn calculate(&self, current: Score, roll: DiceRoll) -> Score {
        (**self).calculate(current, roll)
    }
}

/// Score increases by the face value.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleScoring;

impl ScoringStrategy for SimpleScoring {
    fn calculate(&self, current: Score, roll: DiceRoll) -> Score {
        current.credit(roll.value())
    }
}

/// A six scores an extra six points.
#[derive(Clone, Copy, Debug, Default)]
pub struct BonusOnMax;

impl BonusOnMax {
    /// Points added on top of a maximum roll.
    pub const BONUS: u32 = 6;
}

impl ScoringStrategy for BonusOnMax {
    fn calculate(&self, current: Score, roll: DiceRoll) -> Score {
        if roll.is_max() {
            current.credit(roll.value() + Self::BONUS)
        } else {
            current.credit(roll.value())
        }
    }
}

/// Even faces count double.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleOnEven;

impl ScoringStrategy for DoubleOnEven {
    fn calculate(&self, current: Score, roll: DiceRoll) -> Score {
        if roll.is_even() {
            current.credit(roll.value() * 2)
        } else {
            current.credit(roll.value())
        }
    }
}

impl ScoringKind {
    /// Instantiate the strategy this kind names.
    #[must_use]
    pub fn strategy(self) -> Box<dyn ScoringStrategy> {
        match self {
            ScoringKind::Simple => Box::new(SimpleScoring),
            ScoringKind::BonusOnMax => Box::new(BonusOnMax),
            ScoringKind::DoubleOnEven => Box::new(DoubleOnEven),
        }
    }
}
