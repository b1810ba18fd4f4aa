//! Game configuration.
//!
//! The only choices made at construction time are which dice to roll and
//! how to score them. `GameConfig` bundles those with the seed and the
//! optional roll-source wrappers.

use serde::{Deserialize, Serialize};

use super::roll::RollKind;

/// Which roll source a game uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceKind {
    /// Deterministic 1, 2, 3, 4, 5, 6 cycle.
    Fixed,
    /// One fair die.
    #[default]
    Single,
    /// Sum of two fair dice.
    Double,
}

impl DiceKind {
    /// Human-readable description of the source.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            DiceKind::Fixed => "Fixed dice shaker (for testing)",
            DiceKind::Single => "Single dice shaker (rolls 1-6)",
            DiceKind::Double => "Double dice shaker (rolls 2-12)",
        }
    }

    /// Shape of the values this source produces.
    #[must_use]
    pub const fn roll_kind(self) -> RollKind {
        match self {
            DiceKind::Fixed | DiceKind::Single => RollKind::Single,
            DiceKind::Double => RollKind::Double,
        }
    }
}

impl std::fmt::Display for DiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Which scoring strategy a session uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringKind {
    /// Score increases by the roll.
    #[default]
    Simple,
    /// A six earns six bonus points.
    BonusOnMax,
    /// Even rolls count twice.
    DoubleOnEven,
}

/// Construction-time game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Roll source variant.
    pub dice: DiceKind,

    /// Scoring strategy variant.
    pub scoring: ScoringKind,

    /// Seed for random dice. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Wrap the roll source in a counting decorator.
    pub count_rolls: bool,

    /// Wrap the roll source in a logging decorator.
    pub log_rolls: bool,
}

impl GameConfig {
    /// Create the default configuration (single die, simple scoring).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roll source variant.
    #[must_use]
    pub fn with_dice(mut self, dice: DiceKind) -> Self {
        self.dice = dice;
        self
    }

    /// Set the scoring strategy variant.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringKind) -> Self {
        self.scoring = scoring;
        self
    }

    /// Fix the seed for reproducible random dice.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Count every roll.
    #[must_use]
    pub fn counting(mut self) -> Self {
        self.count_rolls = true;
        self
    }

    /// Log every roll.
    #[must_use]
    pub fn logging(mut self) -> Self {
        self.log_rolls = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.dice, DiceKind::Single);
        assert_eq!(config.scoring, ScoringKind::Simple);
        assert_eq!(config.seed, None);
        assert!(!config.count_rolls);
        assert!(!config.log_rolls);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_dice(DiceKind::Double)
            .with_scoring(ScoringKind::DoubleOnEven)
            .with_seed(9)
            .counting()
            .logging();

        assert_eq!(config.dice, DiceKind::Double);
        assert_eq!(config.scoring, ScoringKind::DoubleOnEven);
        assert_eq!(config.seed, Some(9));
        assert!(config.count_rolls && config.log_rolls);
    }

    #[test]
    fn test_roll_kinds() {
        assert_eq!(DiceKind::Fixed.roll_kind(), RollKind::Single);
        assert_eq!(DiceKind::Single.roll_kind(), RollKind::Single);
        assert_eq!(DiceKind::Double.roll_kind(), RollKind::Double);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_dice(DiceKind::Fixed).with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"scoring":"BonusOnMax"}"#).unwrap();
        assert_eq!(config.scoring, ScoringKind::BonusOnMax);
        assert_eq!(config.dice, DiceKind::Single);
    }
}
