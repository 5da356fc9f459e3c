//! `OnvoClient` - entry point to the ONVO API and webhook decoding.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::domain::webhook::WebhookDispatcher;
use crate::ports::{ApiError, ApiTransport};

use super::http_transport::OnvoHttpTransport;
use super::services::{
    CustomerService, PaymentIntentService, PaymentMethodService, PriceService, ProductService,
    RefundService, ShippingRateService, SubscriptionService,
};

/// ONVO API client.
///
/// Cloning is cheap; every service shares one transport.
///
/// # Example
///
/// ```ignore
/// let client = OnvoClient::new(&ClientConfig::new(api_key))?;
/// let intent = client.payment_intents().retrieve("pi_123").await?;
/// ```
#[derive(Clone)]
pub struct OnvoClient {
    customers: CustomerService,
    payment_intents: PaymentIntentService,
    payment_methods: PaymentMethodService,
    products: ProductService,
    prices: PriceService,
    refunds: RefundService,
    shipping_rates: ShippingRateService,
    subscriptions: SubscriptionService,
    webhooks: WebhookDispatcher,
}

impl OnvoClient {
    /// Build a client talking HTTP to the configured base URL.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = OnvoHttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Build a client over any transport (mocks, proxies).
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            customers: CustomerService::new(Arc::clone(&transport)),
            payment_intents: PaymentIntentService::new(Arc::clone(&transport)),
            payment_methods: PaymentMethodService::new(Arc::clone(&transport)),
            products: ProductService::new(Arc::clone(&transport)),
            prices: PriceService::new(Arc::clone(&transport)),
            refunds: RefundService::new(Arc::clone(&transport)),
            shipping_rates: ShippingRateService::new(Arc::clone(&transport)),
            subscriptions: SubscriptionService::new(transport),
            webhooks: WebhookDispatcher::new(),
        }
    }

    pub fn customers(&self) -> &CustomerService {
        &self.customers
    }

    pub fn payment_intents(&self) -> &PaymentIntentService {
        &self.payment_intents
    }

    pub fn payment_methods(&self) -> &PaymentMethodService {
        &self.payment_methods
    }

    pub fn products(&self) -> &ProductService {
        &self.products
    }

    pub fn prices(&self) -> &PriceService {
        &self.prices
    }

    pub fn refunds(&self) -> &RefundService {
        &self.refunds
    }

    pub fn shipping_rates(&self) -> &ShippingRateService {
        &self.shipping_rates
    }

    pub fn subscriptions(&self) -> &SubscriptionService {
        &self.subscriptions
    }

    /// Decoder for incoming webhook payloads.
    pub fn webhooks(&self) -> &WebhookDispatcher {
        &self.webhooks
    }
}
