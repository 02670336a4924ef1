//! Hour-of-day types for the 24-slot reservation grid.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};

/// Error returned when an hour value is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hour: {reason}")]
pub struct InvalidHour {
    reason: &'static str,
}

/// An hour of the day, 0 through 23.
///
/// Slots, selections and the clock all index the day by this type, so an
/// out-of-range hour cannot reach them.
///
/// # Examples
///
/// ```
/// use charge_server::domain::SlotHour;
///
/// let h = SlotHour::new(13).unwrap();
/// assert_eq!(h.as_u8(), 13);
/// assert_eq!(h.to_string(), "13:00");
///
/// assert!(SlotHour::new(24).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotHour(u8);

impl SlotHour {
    /// Create a slot hour, rejecting values above 23.
    pub fn new(hour: u8) -> Result<Self, InvalidHour> {
        if hour > 23 {
            return Err(InvalidHour {
                reason: "must be 0-23",
            });
        }
        Ok(SlotHour(hour))
    }

    /// The hour component of a wall-clock instant.
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        // chrono guarantees hour() is 0-23
        SlotHour(at.hour() as u8)
    }

    /// Iterate over all 24 hours in ascending order.
    pub fn all() -> impl Iterator<Item = SlotHour> {
        (0..24).map(SlotHour)
    }

    /// Returns the hour as a plain integer.
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Index into a 24-element array.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// A half-open range of hours: start inclusive, end exclusive.
///
/// This is the shape the reservation wire contract uses: selecting hours
/// 13 through 16 produces the range 13..17. The exclusive end may be 24,
/// which is why it is not itself a [`SlotHour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    start: SlotHour,
    end_exclusive: u8,
}

impl HourRange {
    /// Build a range from two hours in either order, spanning both
    /// inclusively.
    pub fn bounding(a: SlotHour, b: SlotHour) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        HourRange {
            start: lo,
            end_exclusive: hi.as_u8() + 1,
        }
    }

    /// Build a range from a non-empty ascending sequence of hours.
    ///
    /// Returns `None` for an empty sequence. Gaps are not checked here;
    /// the range spans from the first hour through the last.
    pub fn spanning(hours: &[SlotHour]) -> Option<Self> {
        let first = *hours.first()?;
        let last = *hours.last()?;
        Some(HourRange::bounding(first, last))
    }

    /// The first hour in the range.
    pub const fn start(self) -> SlotHour {
        self.start
    }

    /// The exclusive end hour, 1-24.
    pub const fn end_exclusive(self) -> u8 {
        self.end_exclusive
    }

    /// Number of hours covered, always at least one.
    pub const fn len(self) -> usize {
        (self.end_exclusive - self.start.as_u8()) as usize
    }

    /// Whether the range contains the given hour.
    pub fn contains(self, hour: SlotHour) -> bool {
        hour >= self.start && hour.as_u8() < self.end_exclusive
    }

    /// Iterate over the hours covered, ascending.
    pub fn hours(self) -> impl Iterator<Item = SlotHour> {
        (self.start.as_u8()..self.end_exclusive).map(SlotHour)
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {:02}:00", self.start, self.end_exclusive)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_hour() -> impl Strategy<Value = SlotHour> {
        (0u8..24).prop_map(|h| SlotHour::new(h).unwrap())
    }

    proptest! {
        /// Valid hours always parse and round-trip.
        #[test]
        fn valid_hours_roundtrip(h in 0u8..24) {
            let hour = SlotHour::new(h).unwrap();
            prop_assert_eq!(hour.as_u8(), h);
        }

        /// Out-of-range hours are always rejected.
        #[test]
        fn out_of_range_rejected(h in 24u8..=255) {
            prop_assert!(SlotHour::new(h).is_err());
        }

        /// A bounding range contains exactly the hours between its inputs.
        #[test]
        fn bounding_covers_inputs(a in any_hour(), b in any_hour()) {
            let range = HourRange::bounding(a, b);
            prop_assert!(range.contains(a));
            prop_assert!(range.contains(b));
            prop_assert_eq!(range.len(), range.hours().count());

            let lo = a.min(b).as_u8();
            let hi = a.max(b).as_u8();
            prop_assert_eq!(range.len(), (hi - lo + 1) as usize);
        }
    }
}
