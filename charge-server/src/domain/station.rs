//! Charging station identity and records.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A charging station identifier, e.g. `"stn-001"`.
///
/// Identifiers are non-empty, at most 32 bytes, and restricted to ASCII
/// letters, digits, `-` and `_`. This type guarantees validity by
/// construction.
///
/// # Examples
///
/// ```
/// use charge_server::domain::StationId;
///
/// let id = StationId::parse("stn-001").unwrap();
/// assert_eq!(id.as_str(), "stn-001");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("stn 001").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }
        if s.len() > 32 {
            return Err(InvalidStationId {
                reason: "must be at most 32 bytes",
            });
        }
        for b in s.bytes() {
            if !(b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
                return Err(InvalidStationId {
                    reason: "must be ASCII letters, digits, '-' or '_'",
                });
            }
        }
        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A charging station as known to the reservation flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station identifier, unique within the dataset.
    pub id: StationId,

    /// Human-readable station name.
    pub name: String,

    /// Street address; contains the district name for dataset lookups.
    pub address: String,

    /// Latitude of the station pin.
    pub lat: f64,

    /// Longitude of the station pin.
    pub lng: f64,
}

impl Station {
    /// Create a station record.
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        address: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            lat,
            lng,
        }
    }
}
