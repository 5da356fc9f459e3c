//! ONVO API adapter.
//!
//! Implements the `ApiTransport` port over HTTP and exposes one service per
//! resource family through the `OnvoClient` facade.
//!
//! # Configuration
//!
//! ```ignore
//! let client = OnvoClient::new(&ClientConfig::new("onvo_test_..."))?;
//! ```

mod client;
mod http_transport;
mod mock_transport;
pub mod services;

pub use client::OnvoClient;
pub use http_transport::OnvoHttpTransport;
pub use mock_transport::{MockTransport, RecordedRequest};
pub use services::{
    CustomerService, PaymentIntentService, PaymentMethodService, PriceService, ProductService,
    RefundService, ShippingRateService, SubscriptionService,
};
