use std::sync::Arc;

use serde::Serialize;

use super::Endpoint;
use crate::domain::resources::{ListResponse, Price};
use crate::ports::{ApiError, ApiTransport};

/// `/prices` operations. Prices cannot be deleted, only deactivated.
#[derive(Clone)]
pub struct PriceService {
    endpoint: Endpoint,
}

impl PriceService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, "/prices"),
        }
    }

    pub async fn create(&self, params: &impl Serialize) -> Result<Price, ApiError> {
        self.endpoint.create(params).await
    }

    pub async fn list(&self, query: &[(&str, &str)]) -> Result<ListResponse<Price>, ApiError> {
        self.endpoint.list(query).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Price, ApiError> {
        self.endpoint.retrieve(id).await
    }

    pub async fn update(&self, id: &str, params: &impl Serialize) -> Result<Price, ApiError> {
        self.endpoint.update(id, params).await
    }
}
