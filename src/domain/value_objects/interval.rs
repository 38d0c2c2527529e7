//! Interval bounds for continuous mode

use std::time::Duration;

use rand::Rng;

use crate::error::{RandeployError, RandeployResult};

/// Inclusive `[min, max]` range of delays between continuous deployments,
/// in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalBounds {
    min_ms: u64,
    max_ms: u64,
}

impl IntervalBounds {
    pub fn new(min_ms: u64, max_ms: u64) -> RandeployResult<Self> {
        if min_ms > max_ms {
            return Err(RandeployError::InvalidInterval {
                min: min_ms,
                max: max_ms,
            });
        }
        Ok(Self { min_ms, max_ms })
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    /// Draw a delay uniformly from `[min, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}

impl Default for IntervalBounds {
    fn default() -> Self {
        Self {
            min_ms: 30_000,
            max_ms: 60_000,
        }
    }
}
