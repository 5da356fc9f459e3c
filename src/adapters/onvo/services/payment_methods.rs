use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use super::Endpoint;
use crate::domain::resources::{ListResponse, PaymentMethod};
use crate::ports::{ApiError, ApiTransport};

/// `/payment-methods` operations.
#[derive(Clone)]
pub struct PaymentMethodService {
    endpoint: Endpoint,
}

impl PaymentMethodService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, "/payment-methods"),
        }
    }

    pub async fn create(&self, params: &impl Serialize) -> Result<PaymentMethod, ApiError> {
        self.endpoint.create(params).await
    }

    pub async fn list(
        &self,
        query: &[(&str, &str)],
    ) -> Result<ListResponse<PaymentMethod>, ApiError> {
        self.endpoint.list(query).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<PaymentMethod, ApiError> {
        self.endpoint.retrieve(id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &impl Serialize,
    ) -> Result<PaymentMethod, ApiError> {
        self.endpoint.update(id, params).await
    }

    /// Detaches the method from its customer; returns the raw response.
    pub async fn detach(&self, id: &str) -> Result<Value, ApiError> {
        self.endpoint.action(id, "detach", &json!({})).await
    }
}
