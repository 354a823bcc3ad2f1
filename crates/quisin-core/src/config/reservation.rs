//! Reservation admission configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the reservation admission rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationConfig {
    /// Half-width of the symmetric exclusion window around a booking.
    #[serde(default = "default_window")]
    pub conflict_window_minutes: u32,
    /// Reject bookings against tables that are not `active`.
    #[serde(default)]
    pub require_active_table: bool,
    /// Pause before the single retry after a serialization failure.
    #[serde(default = "default_backoff")]
    pub contention_retry_backoff_ms: u64,
}

impl ReservationConfig {
    /// Backoff before retrying a contended transaction.
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.contention_retry_backoff_ms)
    }
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            conflict_window_minutes: default_window(),
            require_active_table: false,
            contention_retry_backoff_ms: default_backoff(),
        }
    }
}

fn default_window() -> u32 {
    120
}

fn default_backoff() -> u64 {
    50
}
