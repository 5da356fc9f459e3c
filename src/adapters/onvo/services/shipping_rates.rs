use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::Endpoint;
use crate::domain::resources::{ListResponse, ShippingRate};
use crate::ports::{ApiError, ApiTransport};

/// `/shipping-rates` operations.
#[derive(Clone)]
pub struct ShippingRateService {
    endpoint: Endpoint,
}

impl ShippingRateService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, "/shipping-rates"),
        }
    }

    pub async fn create(&self, params: &impl Serialize) -> Result<ShippingRate, ApiError> {
        self.endpoint.create(params).await
    }

    pub async fn list(
        &self,
        query: &[(&str, &str)],
    ) -> Result<ListResponse<ShippingRate>, ApiError> {
        self.endpoint.list(query).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<ShippingRate, ApiError> {
        self.endpoint.retrieve(id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &impl Serialize,
    ) -> Result<ShippingRate, ApiError> {
        self.endpoint.update(id, params).await
    }

    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.endpoint.delete(id).await
    }
}
