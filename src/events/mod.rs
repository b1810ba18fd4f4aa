//! Session lifecycle events and the sinks that receive them.
//!
//! A session reports three things: a player started, a roll was made, the
//! game finished. Any number of [`EventSink`]s can listen. They are called
//! synchronously, in the order they were attached, before the triggering
//! call returns.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: A lifecycle event as a plain, serializable value
//! - [`EventSink`]: Receiver interface (all methods default to no-ops)
//! - [`SinkList`]: Ordered attachment list with [`SinkId`] handles
//! - [`TracingSink`], [`RecordingSink`], [`NullSink`]: Stock sinks
//!
//! ## Example Usage
//!
//! ```
//! use std::rc::Rc;
//! use rust_dicegame::core::PlayerName;
//! use rust_dicegame::events::{GameEvent, RecordingSink, SinkList};
//!
//! let recorder = Rc::new(RecordingSink::new());
//! let mut sinks = SinkList::new();
//! sinks.attach(recorder.clone());
//!
//! let alice = PlayerName::new("Alice").unwrap();
//! sinks.notify(&GameEvent::started(alice.clone()));
//!
//! assert_eq!(recorder.events(), vec![GameEvent::started(alice)]);
//! ```

mod event;
mod sink;
mod listeners;

pub use event::GameEvent;
pub use sink::{EventSink, NullSink, RecordingSink, TracingSink};
pub use listeners::{SinkId, SinkList};
