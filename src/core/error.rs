//! Error taxonomy for the engine.
//!
//! Two families of failure exist:
//! - validation errors, raised when a value type or the board is asked to
//!   hold something outside its domain;
//! - state-precondition errors, raised when a session is driven before it
//!   has been started.
//!
//! Neither family is transient. Operations validate before they mutate,
//! so a returned error always means nothing changed.

use derive_more::{Display, Error};

/// Engine error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A score was constructed from a negative value.
    #[display("negative score is not allowed: {value}")]
    NegativeScore {
        /// The rejected value.
        value: i64,
    },

    /// A negative amount was added to a score.
    #[display("cannot add a negative amount to a score: {amount}")]
    NegativeAmount {
        /// The rejected amount.
        amount: i64,
    },

    /// Score arithmetic left the representable range.
    #[display("score overflow")]
    ScoreOverflow,

    /// Player name was empty or whitespace only.
    #[display("player name must not be empty")]
    EmptyPlayerName,

    /// A single die produced a value outside 1..=6.
    #[display("dice roll must be between 1 and 6, got {value}")]
    RollOutOfRange {
        /// The rejected roll.
        value: u32,
    },

    /// A board position fell outside the track.
    #[display("board position {position} is outside the track")]
    PositionOutOfRange {
        /// The rejected 0-based position.
        position: usize,
    },

    /// A fixed roll sequence was given no values.
    #[display("fixed roll sequence must contain at least one value")]
    EmptySequence,

    /// `roll` or `finish` was called before `start`.
    #[display("game not started")]
    NotStarted,
}

/// Result alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;
