//! Ready-made games built from the engine parts.
//!
//! - [`play_track`]: roll until the traveller laps the board and returns home
//! - [`GameFacade`]: assembles sessions and track runs from a [`crate::core::GameConfig`]

mod track;
mod facade;

pub use track::{play_track, TrackOutcome};
pub use facade::GameFacade;
