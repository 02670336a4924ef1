//! Reservation backend error types.

/// Errors from the reservation HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend refused the reservation with a structured message
    #[error("reservation rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// API returned a non-2xx status without a structured body
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl BackendError {
    /// Line shown to the user when a submission fails.
    ///
    /// Structured rejections pass the server's message through verbatim;
    /// everything else collapses to a generic retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Rejected { message, .. } => message.clone(),
            _ => "Reservation failed. Please try again.".to_string(),
        }
    }
}
