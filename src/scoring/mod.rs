//! Scoring strategies.
//!
//! A [`ScoringStrategy`] maps the current score and a die roll to a new
//! score. Strategies are pure and stateless, so one instance can serve any
//! number of sessions.

mod strategy;

pub use strategy::{BonusOnMax, DoubleOnEven, ScoringStrategy, SimpleScoring};
