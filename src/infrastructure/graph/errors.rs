use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Graph API
#[derive(Error, Debug)]
pub enum GraphApiError {
    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid or expired bearer token (HTTP 401)
    #[error("Unauthorized - bearer token rejected")]
    Unauthorized,

    /// Forbidden - missing scope or permission (HTTP 403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// Request throttled (HTTP 429)
    #[error("Throttled - too many requests")]
    Throttled,

    /// Server error from the Graph API (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unknown or unexpected error
    #[error("Unknown error ({0}): {1}")]
    UnknownError(StatusCode, String),
}

impl GraphApiError {
    /// Classify a non-success HTTP status plus error body.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::InvalidRequest(body),
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Self::Throttled,
            status if status.is_server_error() => Self::ServerError(status, body),
            status => Self::UnknownError(status, body),
        }
    }

    /// Returns true if this error is transient and a caller may retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Throttled | Self::ServerError(_, _) | Self::NetworkError(_)
        )
    }

    /// Returns true if this is a permanent error a retry cannot fix
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_) | Self::Unauthorized | Self::Forbidden(_) | Self::NotFound
        )
    }
}
