//! The per-station slot board: 24 hourly slots and their statuses.

use std::fmt;

use super::hour::SlotHour;

/// Number of slots on a board, one per hour of the day.
pub const SLOTS_PER_DAY: usize = 24;

/// The reservation status of a single hourly slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotStatus {
    /// Free to select.
    Available,
    /// Booked by someone else, or the hour currently in progress.
    Occupied,
    /// Part of the user's current selection.
    Selected,
    /// The hour has already passed today.
    Past,
}

impl SlotStatus {
    /// Whether a tap may land on a slot in this status.
    ///
    /// Occupied and past slots ignore taps; available slots can be
    /// selected and selected slots can be tapped again to deselect.
    pub fn is_selectable(self) -> bool {
        matches!(self, SlotStatus::Available | SlotStatus::Selected)
    }
}

/// One hourly slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// The hour this slot covers.
    pub hour: SlotHour,

    /// Current status.
    pub status: SlotStatus,
}

/// The full 24-slot board for one station session.
///
/// Exactly one slot per hour, stored in hour order, so `hour` and array
/// index always agree. Built through [`SlotBoard::build`], which makes
/// the shape impossible to get wrong.
#[derive(Clone, PartialEq, Eq)]
pub struct SlotBoard([Slot; SLOTS_PER_DAY]);

impl SlotBoard {
    /// Build a board by asking `status_of` for each hour in order.
    pub fn build(mut status_of: impl FnMut(SlotHour) -> SlotStatus) -> Self {
        let slots = std::array::from_fn(|i| {
            // from_fn indexes 0..24, always a valid hour
            let hour = SlotHour::new(i as u8).unwrap();
            Slot {
                hour,
                status: status_of(hour),
            }
        });
        SlotBoard(slots)
    }

    /// The status of the slot at the given hour.
    pub fn status(&self, hour: SlotHour) -> SlotStatus {
        self.0[hour.index()].status
    }

    /// Set the status of the slot at the given hour.
    pub fn set_status(&mut self, hour: SlotHour, status: SlotStatus) {
        self.0[hour.index()].status = status;
    }

    /// All 24 slots in hour order.
    pub fn slots(&self) -> &[Slot; SLOTS_PER_DAY] {
        &self.0
    }

    /// Iterate over the slots in hour order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.0.iter()
    }

    /// Hours currently marked [`SlotStatus::Selected`], ascending.
    pub fn selected_hours(&self) -> Vec<SlotHour> {
        self.hours_with(SlotStatus::Selected)
    }

    /// Hours currently in the given status, ascending.
    pub fn hours_with(&self, status: SlotStatus) -> Vec<SlotHour> {
        self.0
            .iter()
            .filter(|s| s.status == status)
            .map(|s| s.hour)
            .collect()
    }
}

impl fmt::Debug for SlotBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One letter per hour keeps test failures readable
        let mut line = String::with_capacity(SLOTS_PER_DAY);
        for slot in &self.0 {
            line.push(match slot.status {
                SlotStatus::Available => 'a',
                SlotStatus::Occupied => 'o',
                SlotStatus::Selected => 'S',
                SlotStatus::Past => '.',
            });
        }
        write!(f, "SlotBoard({line})")
    }
}
