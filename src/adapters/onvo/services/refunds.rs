use std::sync::Arc;

use serde::Serialize;

use super::Endpoint;
use crate::domain::resources::Refund;
use crate::ports::{ApiError, ApiTransport};

#[derive(Clone)]
pub struct RefundService {
    endpoint: Endpoint,
}

impl RefundService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, "/refunds"),
        }
    }

    pub async fn create(&self, params: &impl Serialize) -> Result<Refund, ApiError> {
        self.endpoint.create(params).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Refund, ApiError> {
        self.endpoint.retrieve(id).await
    }
}
