//! Symmetric exclusion window around a booking time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A closed interval `[start, end]` of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// The window `[center - half_width, center + half_width]`.
    pub fn around(center: DateTime<Utc>, half_width: Duration) -> Self {
        Self {
            start: center - half_width,
            end: center + half_width,
        }
    }

    /// Inclusive on both ends, matching SQL `BETWEEN`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
