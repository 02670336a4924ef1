//! Events delivered to a session's queue.

use tokio::sync::oneshot;

use crate::backend::{BackendError, ReservationReceipt};
use crate::domain::{HourRange, SlotHour, StationId};

use super::view::BoardView;

/// Everything that can happen to a session.
///
/// User gestures, the hourly clock tick, and submission completions all
/// arrive through this one queue, so handlers never run concurrently
/// against the same board.
#[derive(Debug)]
pub enum SessionEvent {
    /// A tap landed on the given hour.
    Tap { hour: SlotHour },

    /// The clear control was pressed.
    ClearSelection,

    /// The contact field changed.
    ContactChanged { value: String },

    /// The reserve button was pressed.
    Submit,

    /// The wall clock may have crossed an hour boundary.
    ClockTick,

    /// The in-flight submission finished.
    SubmissionResolved {
        outcome: Result<ReservationReceipt, BackendError>,
    },

    /// Read-only state request.
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },

    /// The station view was closed; stop processing, including any
    /// still-pending submission outcome.
    Close,
}

/// Point-in-time copy of session state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Station this session is for.
    pub station: StationId,

    /// Drawable board state.
    pub view: BoardView,

    /// Currently selected hours, ascending.
    pub selected_hours: Vec<SlotHour>,

    /// Pending range anchor, if a range selection is half-made.
    pub anchor: Option<SlotHour>,

    /// Current contact field contents.
    pub contact: String,

    /// The range of the in-flight submission, if one is pending.
    pub pending_submission: Option<HourRange>,
}
