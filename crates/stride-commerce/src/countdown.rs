//! Flash-sale countdown clock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cosmetic countdown over hours, minutes, and seconds.
///
/// Pure state: the owner drives it by calling [`tick`](Countdown::tick) on a
/// fixed interval and is responsible for cancelling that interval when the
/// displaying view goes away. The countdown has no interaction with the
/// query engine or favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_secs: u64,
}

impl Countdown {
    /// Create a countdown from hours, minutes, and seconds.
    pub const fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            remaining_secs: hours * 3600 + minutes * 60 + seconds,
        }
    }

    /// Create a countdown from a raw number of seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            remaining_secs: secs,
        }
    }

    /// Advance by one second, saturating at zero.
    ///
    /// Returns `true` once the countdown has finished.
    pub fn tick(&mut self) -> bool {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.is_finished()
    }

    /// Remaining time split into (hours, minutes, seconds).
    pub fn hms(&self) -> (u64, u64, u64) {
        (
            self.remaining_secs / 3600,
            (self.remaining_secs % 3600) / 60,
            self.remaining_secs % 60,
        )
    }

    /// Remaining time in seconds.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Check whether the countdown has reached zero.
    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{:02}:{:02}:{:02}", h, m, s)
    }
}
