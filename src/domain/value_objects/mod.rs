//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod interval;
mod test_level;

pub use interval::IntervalBounds;
pub use test_level::TestLevel;
