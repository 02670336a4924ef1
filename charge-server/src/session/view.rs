//! Derived view state pushed to the presentation surface.

use crate::domain::{SlotBoard, SlotStatus};
use crate::selection::SelectionState;

/// One slot row as the surface should draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct HourView {
    /// Hour this row covers, 0-23.
    pub hour: u8,

    /// Display label, e.g. `"13:00"`.
    pub label: String,

    /// Current slot status.
    pub status: SlotStatus,

    /// Whether a tap on this row does anything.
    pub selectable: bool,

    /// Short status caption.
    pub caption: &'static str,
}

/// Footer line summarizing the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSummary {
    /// Formatted range, e.g. `"13:00 ~ 17:00"`.
    pub range_label: String,

    /// Number of selected hours.
    pub hour_count: usize,
}

/// Everything the surface needs to draw the slot board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    /// All 24 slot rows, hour ascending.
    pub hours: Vec<HourView>,

    /// Present only while something is selected.
    pub summary: Option<SelectionSummary>,
}

impl BoardView {
    /// Project the board and selection into drawable state.
    pub fn project(board: &SlotBoard, selection: &SelectionState) -> Self {
        let hours = board
            .iter()
            .map(|slot| HourView {
                hour: slot.hour.as_u8(),
                label: slot.hour.to_string(),
                status: slot.status,
                selectable: slot.status.is_selectable(),
                caption: caption_for(slot.status),
            })
            .collect();

        let summary = selection.bounding_range().map(|range| SelectionSummary {
            range_label: range.to_string(),
            hour_count: selection.len(),
        });

        BoardView { hours, summary }
    }
}

fn caption_for(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Available => "open",
        SlotStatus::Occupied => "booked",
        SlotStatus::Selected => "selected",
        SlotStatus::Past => "past",
    }
}

/// A user-facing message produced by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Reservation went through.
    Confirmed {
        /// Message from the backend.
        message: String,
        /// Backend-assigned reservation identifier.
        reservation_id: String,
        /// The reserved range, e.g. `"13:00 ~ 17:00"`.
        range: String,
    },

    /// Something the user can correct or retry.
    Error { message: String },
}
