//! Mock reservation backend for session tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore};

use super::api::ReserveApi;
use super::error::BackendError;
use super::types::{ReservationReceipt, ReservationRequest};

/// In-memory stand-in for the reservation backend.
///
/// Records every request it sees and answers with scripted results, or
/// a canned confirmation when nothing is scripted. A gated mock parks
/// each call after recording it until [`MockReserveApi::release_one`]
/// lets it through, so tests can observe a submission mid-flight.
#[derive(Clone)]
pub struct MockReserveApi {
    inner: Arc<Inner>,
}

struct Inner {
    requests: Mutex<Vec<ReservationRequest>>,
    scripted: Mutex<VecDeque<Result<ReservationReceipt, BackendError>>>,
    gate: Option<Semaphore>,
}

impl MockReserveApi {
    /// An ungated mock: calls complete immediately.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// A gated mock: calls record themselves, then wait to be released.
    pub fn gated() -> Self {
        Self::build(Some(Semaphore::new(0)))
    }

    fn build(gate: Option<Semaphore>) -> Self {
        Self {
            inner: Arc::new(Inner {
                requests: Mutex::new(Vec::new()),
                scripted: Mutex::new(VecDeque::new()),
                gate,
            }),
        }
    }

    /// Queue the result handed to an upcoming call.
    pub async fn script(&self, result: Result<ReservationReceipt, BackendError>) {
        self.inner.scripted.lock().await.push_back(result);
    }

    /// Let one parked call proceed. No-op on an ungated mock.
    pub fn release_one(&self) {
        if let Some(gate) = &self.inner.gate {
            gate.add_permits(1);
        }
    }

    /// Every request seen so far, in arrival order.
    pub async fn requests(&self) -> Vec<ReservationRequest> {
        self.inner.requests.lock().await.clone()
    }

    /// Number of requests seen so far.
    pub async fn request_count(&self) -> usize {
        self.inner.requests.lock().await.len()
    }
}

impl Default for MockReserveApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ReserveApi for MockReserveApi {
    fn create_reservation(
        &self,
        request: ReservationRequest,
    ) -> impl Future<Output = Result<ReservationReceipt, BackendError>> + Send {
        async move {
            let call_number = {
                let mut requests = self.inner.requests.lock().await;
                requests.push(request);
                requests.len()
            };

            if let Some(gate) = &self.inner.gate {
                if let Ok(permit) = gate.acquire().await {
                    permit.forget();
                }
            }

            match self.inner.scripted.lock().await.pop_front() {
                Some(result) => result,
                None => Ok(ReservationReceipt {
                    message: "Reservation confirmed.".to_string(),
                    reservation_id: format!("rsv-{call_number:06}"),
                }),
            }
        }
    }
}
