//! Circular board track.
//!
//! A single traveller moves around a ring of [`TRACK_LENGTH`] cells,
//! starting and finishing at [`HOME`]. The board tracks position and move
//! count; when to stop moving is the caller's decision (see
//! [`crate::games::play_track`]).

mod track;

pub use track::{Board, END, HOME, TRACK_LENGTH};
