//! Time source for `generated_at` stamps.

use crate::error::{CoreError, CoreResult};
use parking_lot::Mutex;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime, UtcOffset};

/// Port for time/clock operations (enables deterministic testing)
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> OffsetDateTime;
}

/// Real clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<OffsetDateTime>,
}

impl FixedClock {
    /// Creates a clock stopped at `at`.
    #[must_use]
    pub fn new(at: OffsetDateTime) -> Self {
        Self { now: Mutex::new(at) }
    }

    /// Moves the clock to `at`.
    pub fn set(&self, at: OffsetDateTime) {
        *self.now.lock() = at;
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock()
    }
}

/// Formats an instant as RFC3339 in UTC at whole-second precision,
/// e.g. `2025-08-18T09:30:00Z`.
///
/// # Errors
///
/// Returns an error if the instant has no RFC3339 representation
/// (years outside 0..=9999).
pub fn format_timestamp(at: OffsetDateTime) -> CoreResult<String> {
    at.to_offset(UtcOffset::UTC)
        .replace_nanosecond(0)
        .map_err(|e| CoreError::invalid_timestamp(e.to_string()))?
        .format(&Rfc3339)
        .map_err(|e| CoreError::invalid_timestamp(e.to_string()))
}
