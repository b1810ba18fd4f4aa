//! Transparent roll-source wrappers.
//!
//! A wrapper forwards `shake` to the source it holds and observes the
//! result. It never changes the value, and it reports the inner source's
//! [`RollKind`]. Wrappers nest freely:
//!
//! ```
//! use rust_dicegame::dice::{CountingRollSource, FixedSequence, LoggingRollSource, RollSource};
//!
//! let mut dice = CountingRollSource::new(LoggingRollSource::new(FixedSequence::default()));
//! assert_eq!(dice.shake(), 1);
//! assert_eq!(dice.shake(), 2);
//! assert_eq!(dice.roll_count(), 2);
//! ```

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::core::RollKind;

use super::source::RollSource;

/// Counts rolls and keeps a per-value tally.
#[derive(Clone, Debug)]
pub struct CountingRollSource<R> {
    inner: R,
    count: u64,
    tally: FxHashMap<u32, u64>,
}

impl<R: RollSource> CountingRollSource<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            count: 0,
            tally: FxHashMap::default(),
        }
    }

    /// Total number of rolls forwarded.
    #[must_use]
    pub fn roll_count(&self) -> u64 {
        self.count
    }

    /// How many times `value` has been rolled.
    #[must_use]
    pub fn count_of(&self, value: u32) -> u64 {
        self.tally.get(&value).copied().unwrap_or(0)
    }

    /// Borrow the wrapped source.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwrap, discarding the tally.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RollSource> RollSource for CountingRollSource<R> {
    fn shake(&mut self) -> u32 {
        let value = self.inner.shake();
        self.count += 1;
        *self.tally.entry(value).or_default() += 1;
        trace!(roll_number = self.count, value, "counted roll");
        value
    }

    fn kind(&self) -> RollKind {
        self.inner.kind()
    }

    fn rolls_counted(&self) -> Option<u64> {
        Some(self.count)
    }
}

/// Emits a `debug` event for every roll.
#[derive(Clone, Debug)]
pub struct LoggingRollSource<R> {
    inner: R,
}

impl<R: RollSource> LoggingRollSource<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped source.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwrap.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RollSource> RollSource for LoggingRollSource<R> {
    fn shake(&mut self) -> u32 {
        let value = self.inner.shake();
        debug!(value, kind = ?self.inner.kind(), "dice rolled");
        value
    }

    fn kind(&self) -> RollKind {
        self.inner.kind()
    }

    fn rolls_counted(&self) -> Option<u64> {
        self.inner.rolls_counted()
    }
}
