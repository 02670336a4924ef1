//! Injectable wall-clock time.
//!
//! Sessions never read the system time directly; they go through a
//! [`Clock`] so tests can pin "now" and drive hour rollovers by hand.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, Timelike};

/// Source of the current local date-time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// The real local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    /// A manual clock pinned at `now`.
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Pin the clock to a new instant.
    pub fn set(&self, now: NaiveDateTime) {
        *self.lock() = now;
    }

    /// Move the clock forward (or back) by `delta`.
    pub fn advance(&self, delta: chrono::Duration) {
        let mut now = self.lock();
        *now += delta;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveDateTime> {
        // A poisoned lock only means a test assert fired mid-set; the
        // stored instant is still usable.
        self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.lock()
    }
}

/// Seconds until the next top of the hour, as a sleep duration.
///
/// At an exact hour boundary the answer is the full hour, so a ticker
/// scheduled right after a tick fires again at the following boundary.
pub fn duration_until_next_hour(now: NaiveDateTime) -> Duration {
    let seconds = 3600 - 60 * u64::from(now.minute()) - u64::from(now.second());
    Duration::from_secs(seconds)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 14)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[test]
    fn delay_from_mid_hour() {
        assert_eq!(duration_until_next_hour(at(10, 25, 30)), Duration::from_secs(2070));
    }

    #[test]
    fn delay_from_exact_boundary_is_a_full_hour() {
        assert_eq!(duration_until_next_hour(at(10, 0, 0)), Duration::from_secs(3600));
    }

    #[test]
    fn delay_just_before_boundary() {
        assert_eq!(duration_until_next_hour(at(10, 59, 59)), Duration::from_secs(1));
    }

    #[test]
    fn manual_clock_holds_and_advances() {
        let clock = ManualClock::at(at(10, 0, 0));
        assert_eq!(clock.now(), at(10, 0, 0));

        clock.advance(chrono::Duration::hours(4));
        assert_eq!(clock.now(), at(14, 0, 0));

        clock.set(at(23, 59, 0));
        assert_eq!(clock.now(), at(23, 59, 0));
    }
}
