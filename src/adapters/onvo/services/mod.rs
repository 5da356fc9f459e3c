//! One service per ONVO resource family.
//!
//! Every service wraps an [`Endpoint`] bound to its collection path and
//! decodes responses into the records in `domain::resources`.

mod customers;
mod payment_intents;
mod payment_methods;
mod prices;
mod products;
mod refunds;
mod shipping_rates;
mod subscriptions;

pub use customers::CustomerService;
pub use payment_intents::PaymentIntentService;
pub use payment_methods::PaymentMethodService;
pub use prices::PriceService;
pub use products::ProductService;
pub use refunds::RefundService;
pub use shipping_rates::ShippingRateService;
pub use subscriptions::SubscriptionService;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::resources::ListResponse;
use crate::ports::{ApiError, ApiErrorCode, ApiTransport};

/// A resource collection such as `/customers`.
#[derive(Clone)]
pub(crate) struct Endpoint {
    transport: Arc<dyn ApiTransport>,
    collection: &'static str,
}

impl Endpoint {
    pub(crate) fn new(transport: Arc<dyn ApiTransport>, collection: &'static str) -> Self {
        Self {
            transport,
            collection,
        }
    }

    pub(crate) fn path(&self, id: &str) -> String {
        format!("{}/{}", self.collection, id)
    }

    pub(crate) async fn create<T: DeserializeOwned>(
        &self,
        params: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self.transport.post(self.collection, to_body(params)?).await?;
        decode(response)
    }

    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        query: &[(&str, &str)],
    ) -> Result<ListResponse<T>, ApiError> {
        self.list_at(self.collection, query).await
    }

    pub(crate) async fn list_at<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ListResponse<T>, ApiError> {
        let response = self.transport.get(path, query).await?;
        decode(response)
    }

    pub(crate) async fn retrieve<T: DeserializeOwned>(&self, id: &str) -> Result<T, ApiError> {
        let response = self.transport.get(&self.path(id), &[]).await?;
        decode(response)
    }

    pub(crate) async fn update<T: DeserializeOwned>(
        &self,
        id: &str,
        params: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self.transport.post(&self.path(id), to_body(params)?).await?;
        decode(response)
    }

    pub(crate) async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.transport.delete(&self.path(id)).await
    }

    /// POSTs to `{collection}/{id}/{action}` and returns the raw JSON.
    pub(crate) async fn action(
        &self,
        id: &str,
        action: &str,
        params: &impl Serialize,
    ) -> Result<Value, ApiError> {
        let path = format!("{}/{}", self.path(id), action);
        self.transport.post(&path, to_body(params)?).await
    }

    pub(crate) fn transport(&self) -> &Arc<dyn ApiTransport> {
        &self.transport
    }
}

pub(crate) fn to_body(params: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(params).map_err(|e| {
        ApiError::new(
            ApiErrorCode::InvalidRequest,
            format!("Failed to serialize request body: {}", e),
        )
    })
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::invalid_response(format!("Unexpected ONVO response shape: {}", e)))
}
