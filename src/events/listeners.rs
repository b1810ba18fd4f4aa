//! Ordered sink list.
//!
//! Sinks are shared (`Rc`) so whoever attached one can keep a handle and
//! inspect it after the session is gone. Notification order is attachment
//! order. Attaching the same sink twice is allowed and delivers twice.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use super::sink::EventSink;

/// Handle returned by [`SinkList::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SinkId(pub u32);

impl SinkId {
    /// Create a new sink ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sink({})", self.0)
    }
}

/// Attached sinks, in notification order.
#[derive(Clone, Default)]
pub struct SinkList {
    sinks: Vec<(SinkId, Rc<dyn EventSink>)>,

    /// Next sink ID to allocate.
    next_id: u32,
}

impl SinkList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sink, returning its handle.
    pub fn attach(&mut self, sink: Rc<dyn EventSink>) -> SinkId {
        let id = SinkId::new(self.next_id);
        self.next_id += 1;
        self.sinks.push((id, sink));
        id
    }

    /// Remove a sink. Returns `false` if `id` was not attached.
    pub fn detach(&mut self, id: SinkId) -> bool {
        let before = self.sinks.len();
        self.sinks.retain(|(sid, _)| *sid != id);
        self.sinks.len() != before
    }

    /// Is `id` currently attached?
    #[must_use]
    pub fn contains(&self, id: SinkId) -> bool {
        self.sinks.iter().any(|(sid, _)| *sid == id)
    }

    /// Deliver `event` to every sink, in attachment order.
    pub fn notify(&self, event: &GameEvent) {
        for (_, sink) in &self.sinks {
            match event {
                GameEvent::Started { player } => sink.on_game_started(player),
                GameEvent::RollMade { player, roll, score } => {
                    sink.on_roll_made(player, *roll, *score)
                }
                GameEvent::Finished { player, final_score } => {
                    sink.on_game_finished(player, *final_score)
                }
            }
        }
    }

    /// Number of attached sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Is the list empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Attached handles, in order.
    pub fn ids(&self) -> impl Iterator<Item = SinkId> + '_ {
        self.sinks.iter().map(|(id, _)| *id)
    }
}

impl std::fmt::Debug for SinkList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkList")
            .field("sinks", &self.ids().collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}
