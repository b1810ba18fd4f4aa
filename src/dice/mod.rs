//! Roll sources.
//!
//! A [`RollSource`] yields one integer per call. Three variants ship with
//! the crate:
//!
//! - [`FixedSequence`]: cycles through a fixed table (deterministic tests)
//! - [`SingleUniform`]: one fair die, 1..=6
//! - [`DoubleUniform`]: sum of two fair dice, 2..=12
//!
//! Sources compose with transparent wrappers ([`CountingRollSource`],
//! [`LoggingRollSource`]) that observe each value without changing it.
//! [`DiceFactory`] builds a boxed source from a [`crate::core::DiceKind`].

mod source;
mod decorator;
mod factory;

pub use source::{DoubleUniform, FixedSequence, RollSource, SingleUniform};
pub use decorator::{CountingRollSource, LoggingRollSource};
pub use factory::DiceFactory;
