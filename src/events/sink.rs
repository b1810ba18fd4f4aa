//! Event sink trait and stock sinks.

use std::cell::RefCell;

use tracing::info;

use crate::core::{PlayerName, Roll, Score};

use super::event::GameEvent;

/// Receives session lifecycle notifications.
///
/// Methods take `&self`; sinks that keep state use interior mutability.
/// Every method defaults to doing nothing, so a sink only implements what
/// it cares about.
pub trait EventSink {
    /// A player started a game.
    fn on_game_started(&self, _player: &PlayerName) {}

    /// A roll was made; `score` is the score after it.
    fn on_roll_made(&self, _player: &PlayerName, _roll: Roll, _score: Score) {}

    /// The game finished with `final_score`.
    fn on_game_finished(&self, _player: &PlayerName, _final_score: Score) {}
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {}

/// Reports events through `tracing` at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn on_game_started(&self, player: &PlayerName) {
        info!(%player, "game started");
    }

    fn on_roll_made(&self, player: &PlayerName, roll: Roll, score: Score) {
        info!(%player, %roll, %score, "roll made");
    }

    fn on_game_finished(&self, player: &PlayerName, final_score: Score) {
        info!(%player, %final_score, "game finished");
    }
}

/// Keeps every event it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<GameEvent>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Number of events received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Has nothing been received?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventSink for RecordingSink {
    fn on_game_started(&self, player: &PlayerName) {
        self.events.borrow_mut().push(GameEvent::started(player.clone()));
    }

    fn on_roll_made(&self, player: &PlayerName, roll: Roll, score: Score) {
        self.events
            .borrow_mut()
            .push(GameEvent::roll_made(player.clone(), roll, score));
    }

    fn on_game_finished(&self, player: &PlayerName, final_score: Score) {
        self.events
            .borrow_mut()
            .push(GameEvent::finished(player.clone(), final_score));
    }
}
