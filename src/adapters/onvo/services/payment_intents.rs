use std::sync::Arc;

use serde::Serialize;

use super::{decode, Endpoint};
use crate::domain::resources::{ListResponse, PaymentIntent};
use crate::ports::{ApiError, ApiTransport};

/// `/payment-intents` operations.
///
/// `confirm`, `capture` and `cancel` accept any body; pass `&json!({})` when
/// the action needs no parameters.
#[derive(Clone)]
pub struct PaymentIntentService {
    endpoint: Endpoint,
}

impl PaymentIntentService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, "/payment-intents"),
        }
    }

    pub async fn create(&self, params: &impl Serialize) -> Result<PaymentIntent, ApiError> {
        self.endpoint.create(params).await
    }

    pub async fn list(
        &self,
        query: &[(&str, &str)],
    ) -> Result<ListResponse<PaymentIntent>, ApiError> {
        self.endpoint.list(query).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<PaymentIntent, ApiError> {
        self.endpoint.retrieve(id).await
    }

    pub async fn confirm(
        &self,
        id: &str,
        params: &impl Serialize,
    ) -> Result<PaymentIntent, ApiError> {
        decode(self.endpoint.action(id, "confirm", params).await?)
    }

    /// Captures a `manual` capture intent, optionally for a partial amount.
    pub async fn capture(
        &self,
        id: &str,
        params: &impl Serialize,
    ) -> Result<PaymentIntent, ApiError> {
        decode(self.endpoint.action(id, "capture", params).await?)
    }

    pub async fn cancel(&self, id: &str, params: &impl Serialize) -> Result<PaymentIntent, ApiError> {
        decode(self.endpoint.action(id, "cancel", params).await?)
    }
}
