//! Core engine types: errors, value types, RNG, configuration.
//!
//! Everything here is independent of how a game is played; the board,
//! dice, scoring and session modules build on these types.

pub mod error;
pub mod score;
pub mod player;
pub mod roll;
pub mod rng;
pub mod config;

pub use error::{GameError, GameResult};
pub use score::Score;
pub use player::PlayerName;
pub use roll::{DiceRoll, Roll, RollKind};
pub use rng::{GameRng, GameRngState};
pub use config::{DiceKind, GameConfig, ScoringKind};
