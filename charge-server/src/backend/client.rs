//! Reservation backend HTTP client.

use std::future::Future;

use super::api::ReserveApi;
use super::error::BackendError;
use super::types::{ErrorBody, ReservationReceipt, ReservationRequest};

/// Default base URL for the reservation backend.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the reservation client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the reservation backend
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Create a config pointing at the default local backend.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the reservation backend.
#[derive(Debug, Clone)]
pub struct ReservationClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReservationClient {
    /// Create a new client from the given configuration.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl ReserveApi for ReservationClient {
    fn create_reservation(
        &self,
        request: ReservationRequest,
    ) -> impl Future<Output = Result<ReservationReceipt, BackendError>> + Send {
        async move {
            let url = format!("{}/reservations", self.base_url);

            let response = self.http.post(&url).json(&request).send().await?;
            let status = response.status();

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(match serde_json::from_str::<ErrorBody>(&body) {
                    Ok(rejection) => BackendError::Rejected {
                        status: status.as_u16(),
                        message: rejection.error,
                    },
                    Err(_) => BackendError::Api {
                        status: status.as_u16(),
                        body: body.chars().take(500).collect(),
                    },
                });
            }

            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| BackendError::Json {
                message: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = BackendConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_builder() {
        let config = BackendConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }
}
