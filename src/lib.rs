//! # rust-dicegame
//!
//! A small board-and-dice game engine with pluggable parts.
//!
//! ## Design Principles
//!
//! 1. **Swappable Parts**: Dice, scoring rules and event sinks are traits.
//!    Games pick implementations at construction time.
//!
//! 2. **Validated Values**: Scores, player names and die faces are types
//!    that cannot hold invalid data. Bad input is an error, never clamped.
//!
//! 3. **Synchronous, Ordered Notification**: Sinks are called in attachment
//!    order before the triggering call returns.
//!
//! ## Architecture
//!
//! - **Deterministic Dice**: Random dice draw from a seeded ChaCha8 stream,
//!   so a recorded seed reproduces a game.
//!
//! - **Composition over Inheritance**: Counting and logging are wrappers
//!   around any roll source, not subclasses.
//!
//! ## Modules
//!
//! - `core`: Errors, value types, RNG, configuration
//! - `board`: Circular track with home cell and move counter
//! - `dice`: Roll sources, wrappers and factory
//! - `scoring`: Scoring strategies
//! - `events`: Lifecycle events and sinks
//! - `session`: Start / roll / finish orchestration
//! - `games`: Board lap game and the configuration facade

pub mod core;
pub mod board;
pub mod dice;
pub mod scoring;
pub mod events;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameResult,
    Score, PlayerName, DiceRoll, Roll, RollKind,
    GameRng, GameRngState,
    DiceKind, ScoringKind, GameConfig,
};

pub use crate::board::{Board, HOME, END, TRACK_LENGTH};

pub use crate::dice::{
    RollSource, FixedSequence, SingleUniform, DoubleUniform,
    CountingRollSource, LoggingRollSource, DiceFactory,
};

pub use crate::scoring::{ScoringStrategy, SimpleScoring, BonusOnMax, DoubleOnEven};

pub use crate::events::{
    GameEvent, EventSink, SinkId, SinkList,
    TracingSink, RecordingSink, NullSink,
};

pub use crate::session::Session;

pub use crate::games::{play_track, TrackOutcome, GameFacade};
