//! Mock transport for testing services without a network.
//!
//! Supports:
//! - Canned JSON responses per method and path
//! - Error injection
//! - Request recording

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use http::Method;
use serde_json::Value;

use crate::ports::{ApiError, ApiTransport};

/// In-memory `ApiTransport`.
///
/// # Example
///
/// ```ignore
/// let mock = MockTransport::new();
/// mock.respond(Method::GET, "/customers/cus_1", json!({"id": "cus_1"}));
///
/// let client = OnvoClient::with_transport(Arc::new(mock.clone()));
/// let customer = client.customers().retrieve("cus_1").await?;
/// assert_eq!(mock.request_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Canned responses keyed by method and path.
    responses: HashMap<(Method, String), Value>,

    /// Error to return on the next request (consumed).
    next_error: Option<ApiError>,

    /// Errors for a specific method and path.
    route_errors: HashMap<(Method, String), ApiError>,

    requests: Vec<RecordedRequest>,
}

/// A request seen by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Return `body` for every request to `method path`.
    pub fn respond(&self, method: Method, path: impl Into<String>, body: Value) {
        self.state().responses.insert((method, path.into()), body);
    }

    /// Fail the next request, whatever its route.
    pub fn set_error(&self, error: ApiError) {
        self.state().next_error = Some(error);
    }

    /// Fail every request to `method path`.
    pub fn set_route_error(&self, method: Method, path: impl Into<String>, error: ApiError) {
        self.state().route_errors.insert((method, path.into()), error);
    }

    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.route_errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Request Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut state = self.state();
        state.requests.push(RecordedRequest {
            method: method.clone(),
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
        });

        let key = (method, path.to_string());

        // Route-specific error first
        if let Some(error) = state.route_errors.get(&key) {
            return Err(error.clone());
        }

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        state
            .responses
            .get(&key)
            .cloned()
            .ok_or_else(|| ApiError::not_found(path))
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.dispatch(Method::GET, path, query, None)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.dispatch(Method::POST, path, &[], Some(body))
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.dispatch(Method::DELETE, path, &[], None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ApiErrorCode;
    use serde_json::json;

    #[tokio::test]
    async fn returns_canned_response_and_records_request() {
        let mock = MockTransport::new();
        mock.respond(Method::POST, "/refunds", json!({"id": "re_1"}));

        let response = mock.post("/refunds", json!({"amount": 10})).await.unwrap();

        assert_eq!(response, json!({"id": "re_1"}));
        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Some(json!({"amount": 10})));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let err = MockTransport::new().get("/nothing", &[]).await.unwrap_err();
        assert_eq!(err.code, ApiErrorCode::NotFound);
    }

    #[tokio::test]
    async fn next_error_is_consumed() {
        let mock = MockTransport::new();
        mock.respond(Method::GET, "/products", json!({"data": []}));
        mock.set_error(ApiError::network("reset"));

        assert!(mock.get("/products", &[]).await.is_err());
        assert!(mock.get("/products", &[]).await.is_ok());
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn route_error_persists_until_cleared() {
        let mock = MockTransport::new();
        mock.respond(Method::DELETE, "/products/p1", json!({}));
        mock.set_route_error(
            Method::DELETE,
            "/products/p1",
            ApiError::from_status(409, "in use"),
        );

        assert!(mock.delete("/products/p1").await.is_err());
        assert!(mock.delete("/products/p1").await.is_err());

        mock.clear_errors();
        assert!(mock.delete("/products/p1").await.is_ok());
    }
}
