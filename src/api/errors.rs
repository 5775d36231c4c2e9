use thiserror::Error;

/// Failure of a call to the CRM API.
///
/// Every variant means "the request failed"; the split only keeps the cause
/// readable in logs and alerts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request could not be sent or the connection broke.
    #[error("Network error: {0}")]
    Transport(String),

    /// The body could not be encoded or decoded as JSON.
    #[error("Invalid JSON: {0}")]
    Body(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Body(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Body(err.to_string())
    }
}
