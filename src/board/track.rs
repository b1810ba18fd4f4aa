//! Board position and move counter.

use tracing::trace;

use crate::core::{GameError, GameResult};

/// The home cell.
pub const HOME: usize = 0;
/// The last cell before wrapping back to home.
pub const END: usize = 20;
/// Number of cells on the track, home included.
pub const TRACK_LENGTH: usize = END - HOME + 1;

/// A circular board with one traveller.
///
/// ```
/// use rust_dicegame::board::Board;
///
/// let mut board = Board::new();
/// assert!(board.is_home());
///
/// board.advance(5).unwrap();
/// assert_eq!(board.position(), 5);
/// assert_eq!(board.current_position(), 6);
/// assert_eq!(board.moves_taken(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    position: usize,
    moves: u32,
}

impl Board {
    /// Create a board with the traveller at home and no moves taken.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with the traveller at `position` and no moves taken.
    pub fn with_position(position: usize) -> GameResult<Self> {
        let mut board = Self::new();
        board.set_position(position)?;
        Ok(board)
    }

    /// Move forward `count` cells, wrapping past [`END`].
    ///
    /// The move counter increases by exactly one on success. On failure the
    /// board is left untouched.
    pub fn advance(&mut self, count: u32) -> GameResult<()> {
        let step = (count % TRACK_LENGTH as u32) as usize;
        let target = (self.position + step) % TRACK_LENGTH;
        self.set_position(target)?;
        self.moves += 1;
        trace!(count, position = self.position, moves = self.moves, "board advanced");
        Ok(())
    }

    /// Is the traveller on the home cell?
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.position == HOME
    }

    /// Has the traveller left home and come back?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_home() && self.moves > 0
    }

    /// Number of successful advances.
    #[must_use]
    pub fn moves_taken(&self) -> u32 {
        self.moves
    }

    /// 0-based position on the track.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// 1-based position for display.
    #[must_use]
    pub fn current_position(&self) -> usize {
        self.position + 1
    }

    fn set_position(&mut self, position: usize) -> GameResult<()> {
        if !(HOME..=END).contains(&position) {
            return Err(GameError::PositionOutOfRange { position });
        }
        self.position = position;
        Ok(())
    }
}
