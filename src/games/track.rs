//! Single-lap board game.
//!
//! The traveller starts at home and keeps moving by whatever the roll
//! source yields until it stands on home again. The very first position
//! (home, no moves) does not count as arriving.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::GameResult;
use crate::dice::RollSource;

/// Result of one lap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackOutcome {
    /// Advances needed to get home.
    pub moves: u32,
    /// Total cells travelled, wraps included.
    pub distance: u64,
}

/// Play one lap of the board with `source`.
///
/// Any source terminates: a fixed table's per-cycle offset is a fixed
/// residue mod the track length, so home recurs; random dice reach it
/// with probability one.
///
/// ```
/// use rust_dicegame::dice::FixedSequence;
/// use rust_dicegame::games::play_track;
///
/// // 1+2+3+4+5+6 = 21, exactly one lap.
/// let outcome = play_track(&mut FixedSequence::default()).unwrap();
/// assert_eq!(outcome.moves, 6);
/// assert_eq!(outcome.distance, 21);
/// ```
pub fn play_track<R: RollSource + ?Sized>(source: &mut R) -> GameResult<TrackOutcome> {
    let mut board = Board::new();
    let mut distance = 0u64;

    while !board.is_complete() {
        let roll = source.shake();
        board.advance(roll)?;
        distance += u64::from(roll);
        debug!(roll, position = board.current_position(), moves = board.moves_taken(), "moved");
    }

    Ok(TrackOutcome {
        moves: board.moves_taken(),
        distance,
    })
}
