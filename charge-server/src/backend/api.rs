//! Submission seam between the session and the reservation backend.

use std::future::Future;

use super::error::BackendError;
use super::types::{ReservationReceipt, ReservationRequest};

/// Reservation submission port.
///
/// The session event loop is generic over this trait, so tests can swap
/// the HTTP client for [`super::MockReserveApi`] without touching the
/// loop itself.
pub trait ReserveApi: Send + Sync + 'static {
    /// Submit one reservation request.
    fn create_reservation(
        &self,
        request: ReservationRequest,
    ) -> impl Future<Output = Result<ReservationReceipt, BackendError>> + Send;
}
