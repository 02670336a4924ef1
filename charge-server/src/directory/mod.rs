//! Station directory: bundled dataset, lookup client, and cache.
//!
//! The dataset backs the stub server; the client and its cached wrapper
//! are what the picker uses to list stations per district.

mod cache;
mod client;
mod dataset;
mod error;

pub use cache::{CacheConfig, CachedDirectory, DirectoryCache};
pub use client::{DirectoryClient, DirectoryConfig, RegionStationsResponse, StationWire};
pub use dataset::{StationDataset, StationDatasetBuilder};
pub use error::DirectoryError;
