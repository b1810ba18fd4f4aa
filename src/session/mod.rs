//! Game session orchestration.
//!
//! A [`Session`] owns a roll source and a scoring strategy, tracks the
//! current player and score, and tells attached sinks about every start,
//! roll and finish.

mod lifecycle;

pub use lifecycle::Session;
