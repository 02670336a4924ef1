//! Wire types for the reservation endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::{HourRange, PhoneNumber, StationId};

/// Body of `POST /reservations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub station_id: String,
    /// Normalized contact digits, 10 or 11 of them.
    pub contact_id: String,
    /// First reserved hour, 0-23.
    pub start_hour: u8,
    /// One past the last reserved hour, 1-24.
    pub end_hour: u8,
}

impl ReservationRequest {
    /// Build the wire request from validated domain values.
    pub fn new(station: &StationId, contact: &PhoneNumber, range: HourRange) -> Self {
        Self {
            station_id: station.as_str().to_string(),
            contact_id: contact.as_str().to_string(),
            start_hour: range.start().as_u8(),
            end_hour: range.end_exclusive(),
        }
    }
}

/// Success body of `POST /reservations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationReceipt {
    pub message: String,
    pub reservation_id: String,
}

/// Error body shared by every non-2xx backend response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
