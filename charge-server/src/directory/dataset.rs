//! Bundled station dataset backing the stub server.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{District, Station, StationId};

use super::error::DirectoryError;

/// Zoom level applied when focusing any district.
const DISTRICT_ZOOM: u8 = 14;

/// The districts and stations one deployment serves.
///
/// Immutable once built; constructed at startup and shared by reference
/// or `Arc` with whoever needs it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationDataset {
    city: String,
    districts: Vec<District>,
    stations: Vec<Station>,
}

impl StationDataset {
    /// City this dataset covers, e.g. "서울".
    pub fn city(&self) -> &str {
        &self.city
    }

    /// All districts, in dataset order.
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// All stations, in dataset order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a district by its exact name.
    pub fn district(&self, name: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.name == name)
    }

    /// Look up a station by its identifier.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id.as_str() == id)
    }

    /// Stations whose address places them inside `district`.
    pub fn stations_in(&self, district: &District) -> Vec<&Station> {
        self.stations
            .iter()
            .filter(|s| s.address.contains(district.name.as_str()))
            .collect()
    }

    /// Load a dataset from a JSON file.
    ///
    /// Stations with identifiers that fail validation are skipped, same
    /// as the builder.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| DirectoryError::Dataset {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let file: DatasetFile =
            serde_json::from_str(&json).map_err(|e| DirectoryError::Dataset {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?;

        let mut dataset = StationDataset {
            city: file.city,
            districts: Vec::with_capacity(file.districts.len()),
            stations: Vec::with_capacity(file.stations.len()),
        };
        for d in file.districts {
            dataset.districts.push(District::new(d.name, d.lat, d.lng, d.zoom));
        }
        for s in file.stations {
            if let Ok(id) = StationId::parse(&s.station_id) {
                dataset
                    .stations
                    .push(Station::new(id, s.name, s.address, s.lat, s.lng));
            }
        }

        Ok(dataset)
    }

    /// The bundled Seoul dataset: 25 districts and the demo stations.
    pub fn seoul() -> Self {
        StationDatasetBuilder::new("서울")
            .district("강남구", 37.5172, 127.0473)
            .district("강동구", 37.5301, 127.1238)
            .district("강북구", 37.6396, 127.0253)
            .district("강서구", 37.5509, 126.8495)
            .district("관악구", 37.4784, 126.9516)
            .district("광진구", 37.5385, 127.0823)
            .district("구로구", 37.4954, 126.8874)
            .district("금천구", 37.4569, 126.8956)
            .district("노원구", 37.6542, 127.0568)
            .district("도봉구", 37.6688, 127.0471)
            .district("동대문구", 37.5744, 127.0396)
            .district("동작구", 37.5124, 126.9393)
            .district("마포구", 37.5663, 126.9014)
            .district("서대문구", 37.5791, 126.9368)
            .district("서초구", 37.4837, 127.0324)
            .district("성동구", 37.5633, 127.0371)
            .district("성북구", 37.5894, 127.0167)
            .district("송파구", 37.5145, 127.1059)
            .district("양천구", 37.5270, 126.8561)
            .district("영등포구", 37.5264, 126.8963)
            .district("용산구", 37.5311, 126.9810)
            .district("은평구", 37.6026, 126.9291)
            .district("종로구", 37.5729, 126.9793)
            .district("중구", 37.5640, 126.9975)
            .district("중랑구", 37.6063, 127.0927)
            .station("stn-001", "강남 코엑스 충전소", "서울 강남구 영동대로 513", 37.5131, 127.0596)
            .station("stn-002", "서초 반포 충전소", "서울 서초구 반포대로 201", 37.5044, 127.0052)
            .station("stn-003", "마포 홍대 충전소", "서울 마포구 양화로 188", 37.5563, 126.9236)
            .station("stn-004", "종로 광화문 충전소", "서울 종로구 세종대로 172", 37.5759, 126.9768)
            .station("stn-005", "송파 잠실 충전소", "서울 송파구 올림픽로 240", 37.5142, 127.1003)
            .station("stn-006", "용산 이태원 충전소", "서울 용산구 이태원로 177", 37.5349, 126.9947)
            .station("stn-007", "영등포 타임스퀘어 충전소", "서울 영등포구 영중로 15", 37.5170, 126.9016)
            .station("stn-008", "노원 중계 충전소", "서울 노원구 동일로 1325", 37.6543, 127.0683)
            .build()
    }
}

/// Dataset file layout for [`StationDataset::from_json_file`].
#[derive(Debug, Deserialize)]
struct DatasetFile {
    city: String,
    districts: Vec<DistrictEntry>,
    stations: Vec<StationEntry>,
}

#[derive(Debug, Deserialize)]
struct DistrictEntry {
    name: String,
    lat: f64,
    lng: f64,
    #[serde(default = "default_zoom")]
    zoom: u8,
}

fn default_zoom() -> u8 {
    DISTRICT_ZOOM
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationEntry {
    station_id: String,
    name: String,
    address: String,
    lat: f64,
    lng: f64,
}

/// Builder for assembling a dataset in code.
#[derive(Debug, Default)]
pub struct StationDatasetBuilder {
    inner: StationDataset,
}

impl StationDatasetBuilder {
    /// Start a dataset for the given city.
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            inner: StationDataset {
                city: city.into(),
                ..StationDataset::default()
            },
        }
    }

    /// Add a district with the standard focus zoom.
    pub fn district(mut self, name: &str, lat: f64, lng: f64) -> Self {
        self.inner
            .districts
            .push(District::new(name, lat, lng, DISTRICT_ZOOM));
        self
    }

    /// Add a station. Invalid identifiers are skipped.
    pub fn station(mut self, id: &str, name: &str, address: &str, lat: f64, lng: f64) -> Self {
        if let Ok(id) = StationId::parse(id) {
            self.inner
                .stations
                .push(Station::new(id, name, address, lat, lng));
        }
        self
    }

    /// Build the dataset.
    pub fn build(self) -> StationDataset {
        self.inner
    }
}
