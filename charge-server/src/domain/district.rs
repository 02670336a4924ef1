//! Map districts used for station browsing.

/// A city district the map can jump to.
///
/// Districts partition the station dataset for the lookup endpoint and
/// carry the camera target the map surface pans to when one is chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    /// District name, e.g. "강남구". Doubles as the lookup region key.
    pub name: String,

    /// Latitude of the district centre.
    pub lat: f64,

    /// Longitude of the district centre.
    pub lng: f64,

    /// Map zoom level to apply when focusing the district.
    pub zoom: u8,
}

impl District {
    /// Create a district record.
    pub fn new(name: impl Into<String>, lat: f64, lng: f64, zoom: u8) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            zoom,
        }
    }
}
