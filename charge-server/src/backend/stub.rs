//! In-process stub of the reservation backend.
//!
//! The production backend is an external service; this stub implements
//! the same wire contract over the bundled dataset so the binary runs
//! self-contained and the HTTP clients can be exercised against a real
//! server in tests.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::directory::{RegionStationsResponse, StationDataset, StationWire};

use super::types::{ErrorBody, ReservationReceipt, ReservationRequest};

/// One accepted reservation.
#[derive(Debug, Clone)]
struct BookedRange {
    station_id: String,
    start_hour: u8,
    end_hour: u8,
}

/// In-memory reservation log.
#[derive(Debug, Default)]
struct Ledger {
    reservations: Vec<BookedRange>,
    next_id: u64,
}

/// Shared stub state.
#[derive(Clone)]
pub struct StubState {
    /// Station dataset served under `/stations`
    pub dataset: Arc<StationDataset>,

    /// Accepted reservations, in arrival order
    ledger: Arc<Mutex<Ledger>>,
}

impl StubState {
    /// Create stub state over a dataset.
    pub fn new(dataset: StationDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            ledger: Arc::new(Mutex::new(Ledger::default())),
        }
    }
}

/// Create the stub router.
pub fn create_router(state: StubState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(region_stations))
        .route("/reservations", post(create_reservation))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Query parameters for `/stations`.
#[derive(Debug, Deserialize)]
struct StationsQuery {
    region: String,
}

/// List the stations of one district.
async fn region_stations(
    State(state): State<StubState>,
    Query(query): Query<StationsQuery>,
) -> Result<Json<RegionStationsResponse>, StubError> {
    let district = state
        .dataset
        .district(&query.region)
        .ok_or_else(|| StubError::NotFound {
            message: format!("no stations found for region: {}", query.region),
        })?;

    let stations = state
        .dataset
        .stations_in(district)
        .into_iter()
        .map(|s| StationWire {
            station_id: s.id.as_str().to_string(),
            name: s.name.clone(),
            address: s.address.clone(),
            lat: s.lat,
            lng: s.lng,
        })
        .collect();

    Ok(Json(RegionStationsResponse {
        city: state.dataset.city().to_string(),
        region_name: district.name.clone(),
        stations,
    }))
}

/// Accept or reject a reservation request.
async fn create_reservation(
    State(state): State<StubState>,
    Json(request): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<ReservationReceipt>), StubError> {
    if request.start_hour > 23 || request.end_hour > 24 || request.start_hour >= request.end_hour {
        return Err(StubError::BadRequest {
            message: format!(
                "invalid hour range: {}..{}",
                request.start_hour, request.end_hour
            ),
        });
    }

    let digits_only = request.contact_id.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || !(10..=11).contains(&request.contact_id.len()) {
        return Err(StubError::BadRequest {
            message: "invalid contact number".to_string(),
        });
    }

    if state.dataset.station(&request.station_id).is_none() {
        return Err(StubError::NotFound {
            message: format!("unknown station: {}", request.station_id),
        });
    }

    let mut ledger = state.ledger.lock().await;

    // Two ranges overlap when each starts before the other ends.
    let taken = ledger.reservations.iter().any(|r| {
        r.station_id == request.station_id
            && request.start_hour < r.end_hour
            && r.start_hour < request.end_hour
    });
    if taken {
        return Err(StubError::Conflict {
            message: "time slot already reserved".to_string(),
        });
    }

    ledger.next_id += 1;
    let reservation_id = format!("rsv-{:06}", ledger.next_id);
    ledger.reservations.push(BookedRange {
        station_id: request.station_id.clone(),
        start_hour: request.start_hour,
        end_hour: request.end_hour,
    });

    info!(
        station = %request.station_id,
        start = request.start_hour,
        end = request.end_hour,
        id = %reservation_id,
        "reservation accepted"
    );

    let receipt = ReservationReceipt {
        message: "Reservation confirmed.".to_string(),
        reservation_id,
    };

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Stub error type.
#[derive(Debug)]
enum StubError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            StubError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            StubError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            StubError::Conflict { message } => (StatusCode::CONFLICT, message),
        };

        debug!(status = %status, %message, "request rejected");

        let body = Json(ErrorBody { error: message });
        (status, body).into_response()
    }
}

/// Bind the stub on an ephemeral port and serve it in the background.
#[cfg(test)]
pub(crate) async fn spawn_for_tests() -> std::net::SocketAddr {
    let state = StubState::new(StationDataset::seoul());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::backend::{BackendConfig, BackendError, ReservationClient, ReserveApi};
    use crate::directory::{DirectoryClient, DirectoryConfig, DirectoryError};
    use crate::domain::{HourRange, PhoneNumber, SlotHour, StationId};

    fn hour(h: u8) -> SlotHour {
        SlotHour::new(h).unwrap()
    }

    fn request(station: &str, start: u8, end_inclusive: u8) -> ReservationRequest {
        ReservationRequest::new(
            &StationId::parse(station).unwrap(),
            &PhoneNumber::parse("010-1234-5678").unwrap(),
            HourRange::bounding(hour(start), hour(end_inclusive)),
        )
    }

    async fn client_for(addr: std::net::SocketAddr) -> ReservationClient {
        ReservationClient::new(BackendConfig::new().with_base_url(format!("http://{addr}")))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_a_valid_reservation() {
        let addr = spawn_for_tests().await;
        let client = client_for(addr).await;

        let receipt = client
            .create_reservation(request("stn-001", 13, 16))
            .await
            .unwrap();

        assert_eq!(receipt.message, "Reservation confirmed.");
        assert_eq!(receipt.reservation_id, "rsv-000001");
    }

    #[tokio::test]
    async fn reservation_ids_are_sequential() {
        let addr = spawn_for_tests().await;
        let client = client_for(addr).await;

        let first = client
            .create_reservation(request("stn-001", 13, 16))
            .await
            .unwrap();
        let second = client
            .create_reservation(request("stn-001", 18, 20))
            .await
            .unwrap();

        assert_eq!(first.reservation_id, "rsv-000001");
        assert_eq!(second.reservation_id, "rsv-000002");
    }

    #[tokio::test]
    async fn overlapping_reservation_is_rejected() {
        let addr = spawn_for_tests().await;
        let client = client_for(addr).await;

        client
            .create_reservation(request("stn-001", 13, 16))
            .await
            .unwrap();

        let err = client
            .create_reservation(request("stn-001", 15, 19))
            .await
            .unwrap_err();

        match err {
            BackendError::Rejected { status, ref message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "time slot already reserved");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(err.user_message(), "time slot already reserved");
    }

    #[tokio::test]
    async fn adjacent_ranges_do_not_conflict() {
        let addr = spawn_for_tests().await;
        let client = client_for(addr).await;

        // 13..15 and 15..17 share only the exclusive boundary.
        client
            .create_reservation(request("stn-001", 13, 14))
            .await
            .unwrap();
        client
            .create_reservation(request("stn-001", 15, 16))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn same_hours_at_another_station_are_free() {
        let addr = spawn_for_tests().await;
        let client = client_for(addr).await;

        client
            .create_reservation(request("stn-001", 13, 16))
            .await
            .unwrap();
        client
            .create_reservation(request("stn-002", 13, 16))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unknown_station_is_rejected() {
        let addr = spawn_for_tests().await;
        let client = client_for(addr).await;

        let err = client
            .create_reservation(request("stn-999", 13, 16))
            .await
            .unwrap_err();

        match err {
            BackendError::Rejected { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "unknown station: stn-999");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_hours_are_rejected() {
        let addr = spawn_for_tests().await;
        let client = client_for(addr).await;

        let backwards = ReservationRequest {
            station_id: "stn-001".to_string(),
            contact_id: "01012345678".to_string(),
            start_hour: 17,
            end_hour: 13,
        };

        let err = client.create_reservation(backwards).await.unwrap_err();
        match err {
            BackendError::Rejected { status, .. } => assert_eq!(status, 400),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unnormalized_contact_is_rejected() {
        let addr = spawn_for_tests().await;
        let client = client_for(addr).await;

        // The wire contract carries normalized digits; separators are the
        // caller's job to strip.
        let dashed = ReservationRequest {
            station_id: "stn-001".to_string(),
            contact_id: "010-1234-5678".to_string(),
            start_hour: 13,
            end_hour: 17,
        };

        let err = client.create_reservation(dashed).await.unwrap_err();
        match err {
            BackendError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "invalid contact number");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn lists_stations_for_a_region() {
        let addr = spawn_for_tests().await;
        let directory =
            DirectoryClient::new(DirectoryConfig::new().with_base_url(format!("http://{addr}")))
                .unwrap();

        let listing = directory.fetch_region("강남구").await.unwrap();

        assert_eq!(listing.city, "서울");
        assert_eq!(listing.region_name, "강남구");
        assert_eq!(listing.stations.len(), 1);
        assert_eq!(listing.stations[0].station_id, "stn-001");
        assert_eq!(listing.stations[0].name, "강남 코엑스 충전소");
    }

    #[tokio::test]
    async fn unknown_region_is_not_found() {
        let addr = spawn_for_tests().await;
        let directory =
            DirectoryClient::new(DirectoryConfig::new().with_base_url(format!("http://{addr}")))
                .unwrap();

        let err = directory.fetch_region("해운대구").await.unwrap_err();
        match err {
            DirectoryError::RegionNotFound { region } => assert_eq!(region, "해운대구"),
            other => panic!("expected RegionNotFound, got {other:?}"),
        }
    }
}
