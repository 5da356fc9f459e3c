//! Subscription (recurring charge) operations, including item management.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::{decode, to_body, Endpoint};
use crate::domain::resources::{ListResponse, RecurringCharge, RecurringItem};
use crate::ports::{ApiError, ApiTransport};

#[derive(Clone)]
pub struct SubscriptionService {
    endpoint: Endpoint,
}

impl SubscriptionService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, "/subscriptions"),
        }
    }

    pub async fn create(&self, params: &impl Serialize) -> Result<RecurringCharge, ApiError> {
        self.endpoint.create(params).await
    }

    pub async fn list(
        &self,
        query: &[(&str, &str)],
    ) -> Result<ListResponse<RecurringCharge>, ApiError> {
        self.endpoint.list(query).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<RecurringCharge, ApiError> {
        self.endpoint.retrieve(id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &impl Serialize,
    ) -> Result<RecurringCharge, ApiError> {
        self.endpoint.update(id, params).await
    }

    /// Cancels the subscription; the raw response is returned because its
    /// shape depends on whether cancellation is immediate or at period end.
    pub async fn cancel(&self, id: &str, params: &impl Serialize) -> Result<Value, ApiError> {
        self.endpoint.action(id, "cancel", params).await
    }

    pub async fn confirm(
        &self,
        id: &str,
        params: &impl Serialize,
    ) -> Result<RecurringCharge, ApiError> {
        decode(self.endpoint.action(id, "confirm", params).await?)
    }

    pub async fn add_item(
        &self,
        subscription_id: &str,
        params: &impl Serialize,
    ) -> Result<RecurringItem, ApiError> {
        decode(self.endpoint.action(subscription_id, "items", params).await?)
    }

    pub async fn update_item(
        &self,
        subscription_id: &str,
        item_id: &str,
        params: &impl Serialize,
    ) -> Result<RecurringItem, ApiError> {
        let path = item_path(&self.endpoint, subscription_id, item_id);
        let response = self.endpoint.transport().post(&path, to_body(params)?).await?;
        decode(response)
    }

    pub async fn remove_item(&self, subscription_id: &str, item_id: &str) -> Result<Value, ApiError> {
        let path = item_path(&self.endpoint, subscription_id, item_id);
        self.endpoint.transport().delete(&path).await
    }
}

fn item_path(endpoint: &Endpoint, subscription_id: &str, item_id: &str) -> String {
    format!("{}/items/{}", endpoint.path(subscription_id), item_id)
}
