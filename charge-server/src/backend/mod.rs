//! Reservation backend: wire contract, HTTP client, and doubles.
//!
//! `ReserveApi` is the seam the session submits through. The production
//! implementation is `ReservationClient` over HTTP; `MockReserveApi`
//! implements the same trait in memory for tests, and `stub` hosts an
//! in-process server speaking the wire contract for the binary and for
//! client integration tests.

mod api;
mod client;
mod error;
mod mock;
pub mod stub;
mod types;

pub use api::ReserveApi;
pub use client::{BackendConfig, ReservationClient};
pub use error::BackendError;
pub use mock::MockReserveApi;
pub use stub::{StubState, create_router};
pub use types::{ErrorBody, ReservationReceipt, ReservationRequest};
