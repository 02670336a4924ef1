//! District focus and station browsing.
//!
//! The picker owns the district list shown beside the map. Choosing a
//! district moves the camera to its centre and lists its stations
//! through the cached directory.

use tracing::debug;

use crate::directory::{CachedDirectory, DirectoryError};
use crate::domain::{District, Station, StationId};
use crate::surface::MapSurface;

/// Map-side station browser.
pub struct StationPicker<M> {
    districts: Vec<District>,
    directory: CachedDirectory,
    map: M,
}

impl<M: MapSurface> StationPicker<M> {
    /// Create a picker over the given districts.
    pub fn new(districts: Vec<District>, directory: CachedDirectory, map: M) -> Self {
        Self {
            districts,
            directory,
            map,
        }
    }

    /// The districts available to focus, in display order.
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// Access the directory, e.g. to invalidate its cache.
    pub fn directory(&self) -> &CachedDirectory {
        &self.directory
    }

    /// Focus a district by name.
    ///
    /// Pans and zooms the map to the district centre, then returns its
    /// stations. Directory entries with malformed identifiers are
    /// dropped rather than failing the whole listing.
    pub async fn focus_district(&mut self, name: &str) -> Result<Vec<Station>, DirectoryError> {
        let district = self
            .districts
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| DirectoryError::RegionNotFound {
                region: name.to_string(),
            })?;

        self.map.pan_to(district.lat, district.lng);
        self.map.set_zoom(district.zoom);

        let listing = self.directory.stations_in_region(&district.name).await?;

        let stations: Vec<Station> = listing
            .stations
            .iter()
            .filter_map(|wire| {
                let id = StationId::parse(&wire.station_id).ok()?;
                Some(Station::new(
                    id,
                    wire.name.clone(),
                    wire.address.clone(),
                    wire.lat,
                    wire.lng,
                ))
            })
            .collect();

        debug!(district = %district.name, stations = stations.len(), "district focused");

        Ok(stations)
    }
}
