//! Station directory error types.

/// Errors from the station directory lookup.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend has no stations for the requested region
    #[error("no stations found for region: {region}")]
    RegionNotFound { region: String },

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failed to load a dataset file
    #[error("dataset error: {message}")]
    Dataset { message: String },
}
