//! Deterministic slot-board generation for a station session.
//!
//! A fresh board marks everything before the current hour as past, the
//! current hour as taken, and seeds the rest from a hash of the station
//! id so that repeated opens of the same station at the same hour show
//! the same availability.

use crate::domain::{SlotBoard, SlotHour, SlotStatus, StationId};

/// Fraction of future hours a station reports as already taken.
const OCCUPANCY_RATE: f64 = 0.3;

/// Bucket count for the seeded occupancy roll.
const ROLL_BUCKETS: u32 = 50;

/// Deterministic stand-in for a per-hour availability roll, in `[0, 1)`.
fn occupancy_roll(seed: u8, hour: SlotHour) -> f64 {
    let mixed = (7 * u32::from(hour.as_u8()) + 13 * u32::from(seed)) % ROLL_BUCKETS;
    f64::from(mixed) / f64::from(ROLL_BUCKETS)
}

/// Build the 24-slot board for `station` as seen at hour `now`.
///
/// Hours before `now` are `Past`, `now` itself is `Occupied`, and later
/// hours are occupied or available per the seeded roll. Pure: identical
/// inputs always produce an identical board.
///
/// # Examples
///
/// ```
/// use charge_server::domain::{SlotHour, SlotStatus, StationId};
/// use charge_server::slots::generate;
///
/// let station = StationId::parse("stn-001").unwrap();
/// let board = generate(&station, SlotHour::new(10).unwrap());
/// assert_eq!(board.status(SlotHour::new(9).unwrap()), SlotStatus::Past);
/// assert_eq!(board.status(SlotHour::new(10).unwrap()), SlotStatus::Occupied);
/// assert_eq!(board.status(SlotHour::new(13).unwrap()), SlotStatus::Available);
/// ```
pub fn generate(station: &StationId, now: SlotHour) -> SlotBoard {
    // Validated station ids are never empty, so the fallback is unreachable.
    let seed = station.as_str().bytes().next_back().unwrap_or(0);
    SlotBoard::build(|hour| {
        if hour < now {
            SlotStatus::Past
        } else if hour == now || occupancy_roll(seed, hour) < OCCUPANCY_RATE {
            SlotStatus::Occupied
        } else {
            SlotStatus::Available
        }
    })
}
