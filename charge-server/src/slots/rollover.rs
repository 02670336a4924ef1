//! Hourly rollover: eroding the board as wall-clock time advances.

use crate::domain::{SlotBoard, SlotHour, SlotStatus};
use crate::selection::SelectionState;

/// What one rollover application changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolloverReport {
    /// Hours whose status just flipped to `Past`.
    pub newly_past: Vec<SlotHour>,
    /// Selected hours forcibly removed because they reached the past or
    /// the current hour.
    pub dropped_hours: Vec<SlotHour>,
    /// Whether an in-progress range anchor was discarded.
    pub anchor_cleared: bool,
}

impl RolloverReport {
    /// Whether the tick took anything away from the user's selection.
    pub fn selection_changed(&self) -> bool {
        !self.dropped_hours.is_empty() || self.anchor_cleared
    }
}

/// Advance the board and selection to the current hour `now`.
///
/// Every slot before `now` becomes `Past`; an available or selected slot
/// at `now` becomes `Occupied`; selected hours at or before `now` leave
/// the selection, and the anchor is dropped once it stops pointing at a
/// selectable hour. One application covers multi-hour jumps, so a
/// session woken after a long suspension catches up in a single tick.
pub fn apply_rollover(
    board: &mut SlotBoard,
    selection: &mut SelectionState,
    now: SlotHour,
) -> RolloverReport {
    let mut newly_past = Vec::new();
    for hour in SlotHour::all() {
        let status = board.status(hour);
        if hour < now {
            if status != SlotStatus::Past {
                board.set_status(hour, SlotStatus::Past);
                newly_past.push(hour);
            }
        } else if hour == now && status.is_selectable() {
            board.set_status(hour, SlotStatus::Occupied);
        }
    }

    let dropped_hours = selection.drop_through(now);
    let anchor_cleared = match selection.anchor() {
        Some(anchor) if anchor <= now => {
            selection.clear_anchor();
            true
        }
        _ => false,
    };

    RolloverReport {
        newly_past,
        dropped_hours,
        anchor_cleared,
    }
}
