//! API transport port for talking to the ONVO REST API.
//!
//! Services depend on this trait rather than on an HTTP client so they can be
//! exercised against an in-memory transport in tests.
//!
//! # Design
//!
//! - **JSON in, JSON out**: Services own the typed (de)serialization
//! - **No retries**: `ApiError::is_retryable` informs the caller, nothing more

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Port for sending requests to the ONVO API.
///
/// Paths are relative to the API base URL and start with `/`.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Send a GET request with optional query pairs.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError>;

    /// Send a POST request with a JSON body.
    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError>;

    /// Send a DELETE request.
    async fn delete(&self, path: &str) -> Result<Value, ApiError>;
}

/// Errors from API operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for categorization.
    pub code: ApiErrorCode,

    /// Human-readable message.
    pub message: String,

    /// HTTP status, absent when no response was received.
    pub status: Option<u16>,

    /// ONVO's `apiCode` from the error body (if available).
    pub provider_code: Option<String>,
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            provider_code: None,
        }
    }

    /// Build an error from a non-2xx HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let code = match status {
            401 | 403 => ApiErrorCode::Authentication,
            404 => ApiErrorCode::NotFound,
            400..=499 => ApiErrorCode::InvalidRequest,
            500..=599 => ApiErrorCode::Provider,
            _ => ApiErrorCode::Unknown,
        };
        let mut err = Self::new(code, message);
        err.status = Some(status);
        err
    }

    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Connection failure or timeout; no response was received.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Network, message)
    }

    pub fn not_found(resource: &str) -> Self {
        let mut err = Self::new(ApiErrorCode::NotFound, format!("{} not found", resource));
        err.status = Some(404);
        err
    }

    /// The API answered but the body could not be decoded.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::InvalidResponse, message)
    }

    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.code, status, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    /// Network connectivity issue.
    Network,

    /// API key missing, invalid, or not allowed.
    Authentication,

    /// Resource not found.
    NotFound,

    /// Request rejected by the API.
    InvalidRequest,

    /// ONVO server-side failure.
    Provider,

    /// Response body was not the expected JSON.
    InvalidResponse,

    /// Unknown error.
    Unknown,
}

impl ApiErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiErrorCode::Network | ApiErrorCode::Provider)
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ApiErrorCode::Network => "network_error",
            ApiErrorCode::Authentication => "authentication_error",
            ApiErrorCode::NotFound => "not_found",
            ApiErrorCode::InvalidRequest => "invalid_request",
            ApiErrorCode::Provider => "provider_error",
            ApiErrorCode::InvalidResponse => "invalid_response",
            ApiErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}
