use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::Endpoint;
use crate::domain::resources::{Customer, ListResponse, PaymentMethod};
use crate::ports::{ApiError, ApiTransport};

/// `/customers` operations.
#[derive(Clone)]
pub struct CustomerService {
    endpoint: Endpoint,
}

impl CustomerService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, "/customers"),
        }
    }

    pub async fn create(&self, params: &impl Serialize) -> Result<Customer, ApiError> {
        self.endpoint.create(params).await
    }

    pub async fn list(&self, query: &[(&str, &str)]) -> Result<ListResponse<Customer>, ApiError> {
        self.endpoint.list(query).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Customer, ApiError> {
        self.endpoint.retrieve(id).await
    }

    pub async fn update(&self, id: &str, params: &impl Serialize) -> Result<Customer, ApiError> {
        self.endpoint.update(id, params).await
    }

    /// Returns the API's deletion acknowledgement as-is.
    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.endpoint.delete(id).await
    }

    /// Payment methods attached to a customer.
    pub async fn list_payment_methods(
        &self,
        customer_id: &str,
        query: &[(&str, &str)],
    ) -> Result<ListResponse<PaymentMethod>, ApiError> {
        let path = format!("{}/payment-methods", self.endpoint.path(customer_id));
        self.endpoint.list_at(&path, query).await
    }
}
