//! reqwest implementation of the `ApiTransport` port.
//!
//! Sends JSON requests to the ONVO REST API with bearer authentication and
//! maps HTTP failures onto `ApiError` codes.

use async_trait::async_trait;
use reqwest::{header, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::ports::{ApiError, ApiTransport};

/// HTTP transport for the ONVO API.
pub struct OnvoHttpTransport {
    api_key: SecretString,
    base_url: String,
    http_client: reqwest::Client,
}

impl OnvoHttpTransport {
    /// Create a transport from client configuration.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        tracing::debug!(method = %method, path = path, "Sending ONVO API request");

        let mut request = self
            .http_client
            .request(method.clone(), self.url(path))
            .bearer_auth(self.api_key.expose_secret())
            .header(header::ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !status.is_success() {
            let err = error_from_response(status, &text);
            tracing::error!(
                method = %method,
                path = path,
                status = status.as_u16(),
                provider_code = err.provider_code.as_deref().unwrap_or_default(),
                "ONVO API request failed: {}",
                err.message
            );
            return Err(err);
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            ApiError::invalid_response(format!("Failed to parse ONVO response: {}", e))
        })
    }
}

#[async_trait]
impl ApiTransport for OnvoHttpTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.send(Method::GET, path, query, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, &[], None).await
    }
}

/// Builds an `ApiError` from a non-2xx response.
///
/// ONVO reports validation failures as `{"message": ["..."]}` and other
/// failures as `{"message": "..."}`; anything else falls back to the reason
/// phrase.
fn error_from_response(status: StatusCode, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<Value>(body).ok();

    let message = parsed
        .as_ref()
        .and_then(error_message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("HTTP error").to_string());

    let err = ApiError::from_status(status.as_u16(), message);

    match parsed.as_ref().and_then(|v| v.get("apiCode")) {
        Some(Value::String(code)) => err.with_provider_code(code.as_str()),
        Some(Value::Number(code)) => err.with_provider_code(code.to_string()),
        _ => err,
    }
}

fn error_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::Array(messages) => messages.first()?.as_str().map(str::to_string),
        Value::String(message) => Some(message.clone()),
        _ => None,
    }
}
