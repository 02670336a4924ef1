//! One station's live reservation flow.
//!
//! Opening a station starts a session: a freshly generated slot board,
//! an empty selection, and a worker task that owns both. Taps, the
//! contact field, submits, hourly clock ticks, and submission outcomes
//! all arrive as [`SessionEvent`]s on one queue, so no two handlers ever
//! observe a half-applied state change. Derived view state flows out
//! through the [`Surface`](crate::surface::Surface) the session was
//! opened with.
//!
//! Closing the station view ends the session; reopening the station
//! generates a fresh board.

mod events;
mod submit;
mod view;


pub use events::{SessionEvent, SessionSnapshot};
pub use submit::ValidationError;
pub use view::{BoardView, HourView, Notice, SelectionSummary};

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::backend::{BackendError, ReservationReceipt, ReservationRequest, ReserveApi};
use crate::clock::{Clock, duration_until_next_hour};
use crate::domain::{HourRange, SlotBoard, SlotHour, StationId};
use crate::selection::{self, SelectionPolicy, SelectionState, TapOutcome};
use crate::slots::{RolloverReport, apply_rollover, generate};
use crate::surface::Surface;

/// Depth of the session event queue.
const EVENT_QUEUE_DEPTH: usize = 32;

/// Error returned when talking to a session that has been closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("session closed")]
pub struct SessionClosed;

/// Handle to a running session.
///
/// Cheap to use from any task; all methods just post an event. Dropping
/// the handle without [`close`](Session::close) leaves the worker running
/// until its queue drains, so prefer an explicit close.
pub struct Session {
    events: mpsc::Sender<SessionEvent>,
    worker: JoinHandle<()>,
    ticker: JoinHandle<()>,
}

impl Session {
    /// Open a session for a station.
    ///
    /// Generates the initial board from the clock's current hour, renders
    /// it to the surface, and starts a ticker that fires at every top of
    /// the hour from now on.
    pub fn open<A, S>(
        station: StationId,
        policy: Box<dyn SelectionPolicy + Send>,
        clock: Arc<dyn Clock>,
        api: A,
        surface: S,
    ) -> Session
    where
        A: ReserveApi + Clone,
        S: Surface,
    {
        let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_DEPTH);

        let now = SlotHour::from_datetime(clock.now());
        let board = generate(&station, now);

        info!(station = %station, now = %now, "session opened");

        let worker = SessionWorker {
            station,
            board,
            selection: SelectionState::new(),
            contact: String::new(),
            pending: None,
            policy,
            clock: clock.clone(),
            api,
            surface,
            events: events_tx.downgrade(),
        };

        let worker = tokio::spawn(worker.run(events_rx));
        let ticker = tokio::spawn(run_ticker(clock, events_tx.downgrade()));

        Session {
            events: events_tx,
            worker,
            ticker,
        }
    }

    /// Report a tap on the given hour.
    pub async fn tap(&self, hour: SlotHour) -> Result<(), SessionClosed> {
        self.send(SessionEvent::Tap { hour }).await
    }

    /// Clear the whole selection.
    pub async fn clear_selection(&self) -> Result<(), SessionClosed> {
        self.send(SessionEvent::ClearSelection).await
    }

    /// Report an edit of the contact field.
    pub async fn contact_changed(&self, value: impl Into<String>) -> Result<(), SessionClosed> {
        self.send(SessionEvent::ContactChanged {
            value: value.into(),
        })
        .await
    }

    /// Ask for the current selection to be reserved.
    pub async fn submit(&self) -> Result<(), SessionClosed> {
        self.send(SessionEvent::Submit).await
    }

    /// Deliver a clock tick out of schedule.
    ///
    /// The ticker does this on the hour; tests drive rollovers through
    /// here after moving a manual clock.
    pub async fn clock_tick(&self) -> Result<(), SessionClosed> {
        self.send(SessionEvent::ClockTick).await
    }

    /// Fetch a point-in-time copy of the session state.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionClosed> {
        let (reply, answer) = oneshot::channel();
        self.send(SessionEvent::Snapshot { reply }).await?;
        answer.await.map_err(|_| SessionClosed)
    }

    /// Close the session.
    ///
    /// Processing stops immediately; a submission still in flight keeps
    /// running but its outcome no longer reaches any state.
    pub async fn close(self) {
        let _ = self.events.send(SessionEvent::Close).await;
        self.ticker.abort();
        let _ = self.worker.await;
    }

    async fn send(&self, event: SessionEvent) -> Result<(), SessionClosed> {
        self.events.send(event).await.map_err(|_| SessionClosed)
    }
}

/// Fires a `ClockTick` at each top of the hour.
async fn run_ticker(clock: Arc<dyn Clock>, events: mpsc::WeakSender<SessionEvent>) {
    loop {
        let wait = duration_until_next_hour(clock.now());
        tokio::time::sleep(wait).await;

        let Some(events) = events.upgrade() else {
            break;
        };
        if events.send(SessionEvent::ClockTick).await.is_err() {
            break;
        }
    }
}

/// Owns all mutable session state; runs on its own task.
struct SessionWorker<A, S> {
    station: StationId,
    board: SlotBoard,
    selection: SelectionState,
    contact: String,
    /// Range of the submission currently in flight, if any.
    pending: Option<HourRange>,
    policy: Box<dyn SelectionPolicy + Send>,
    clock: Arc<dyn Clock>,
    api: A,
    surface: S,
    /// Weak so the handle side alone decides the session's lifetime.
    events: mpsc::WeakSender<SessionEvent>,
}

impl<A, S> SessionWorker<A, S>
where
    A: ReserveApi + Clone,
    S: Surface,
{
    async fn run(mut self, mut events: mpsc::Receiver<SessionEvent>) {
        self.render();

        while let Some(event) = events.recv().await {
            match event {
                SessionEvent::Tap { hour } => self.on_tap(hour),
                SessionEvent::ClearSelection => self.on_clear(),
                SessionEvent::ContactChanged { value } => self.contact = value,
                SessionEvent::Submit => self.on_submit(),
                SessionEvent::ClockTick => self.on_tick(),
                SessionEvent::SubmissionResolved { outcome } => self.on_resolved(outcome),
                SessionEvent::Snapshot { reply } => {
                    let _ = reply.send(self.snapshot());
                }
                SessionEvent::Close => break,
            }
        }

        debug!(station = %self.station, "session closed");
    }

    fn on_tap(&mut self, hour: SlotHour) {
        match self.policy.tap(&mut self.board, &mut self.selection, hour) {
            Ok(TapOutcome::Ignored) => {}
            Ok(outcome) => {
                debug!(hour = %hour, ?outcome, "tap applied");
                self.render();
            }
            Err(blocked) => {
                debug!(range = %blocked.range(), "tap refused, range blocked");
                self.surface.notify(&Notice::Error {
                    message: blocked.to_string(),
                });
            }
        }
    }

    fn on_clear(&mut self) {
        selection::clear_selection(&mut self.board, &mut self.selection);
        self.render();
    }

    fn on_submit(&mut self) {
        if let Some(range) = self.pending {
            debug!(range = %range, "submit refused, reservation already in flight");
            self.surface.notify(&Notice::Error {
                message: "reservation already in progress".to_string(),
            });
            return;
        }

        let (phone, range) = match submit::validate_submission(&self.selection, &self.contact) {
            Ok(checked) => checked,
            Err(reason) => {
                debug!(%reason, "submission failed validation");
                self.surface.notify(&Notice::Error {
                    message: reason.to_string(),
                });
                return;
            }
        };

        let Some(events) = self.events.upgrade() else {
            return;
        };

        let request = ReservationRequest::new(&self.station, &phone, range);
        info!(station = %self.station, range = %range, "submitting reservation");

        // The request snapshots the selection here; later taps cannot
        // change what was submitted.
        self.pending = Some(range);
        let api = self.api.clone();
        tokio::spawn(async move {
            let outcome = api.create_reservation(request).await;
            let _ = events
                .send(SessionEvent::SubmissionResolved { outcome })
                .await;
        });
    }

    fn on_tick(&mut self) {
        let now = SlotHour::from_datetime(self.clock.now());
        let report = apply_rollover(&mut self.board, &mut self.selection, now);

        if report == RolloverReport::default() {
            return;
        }

        debug!(
            now = %now,
            newly_past = report.newly_past.len(),
            dropped = report.dropped_hours.len(),
            "hour rollover applied"
        );
        self.render();
    }

    fn on_resolved(&mut self, outcome: Result<ReservationReceipt, BackendError>) {
        // A completion with nothing in flight is stale; drop it.
        let Some(range) = self.pending.take() else {
            return;
        };

        match outcome {
            Ok(receipt) => {
                info!(
                    id = %receipt.reservation_id,
                    range = %range,
                    "reservation confirmed"
                );
                selection::clear_selection(&mut self.board, &mut self.selection);
                self.render();
                self.surface.notify(&Notice::Confirmed {
                    message: receipt.message,
                    reservation_id: receipt.reservation_id,
                    range: range.to_string(),
                });
            }
            Err(error) => {
                warn!(%error, "reservation failed");
                self.surface.notify(&Notice::Error {
                    message: error.user_message(),
                });
            }
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            station: self.station.clone(),
            view: BoardView::project(&self.board, &self.selection),
            selected_hours: self.selection.to_vec(),
            anchor: self.selection.anchor(),
            contact: self.contact.clone(),
            pending_submission: self.pending,
        }
    }

    fn render(&mut self) {
        let view = BoardView::project(&self.board, &self.selection);
        self.surface.render(&view);
    }
}
