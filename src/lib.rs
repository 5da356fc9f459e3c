//! ONVO Pay - API client and webhook event decoder
//!
//! This crate talks to the ONVO Pay REST API and turns raw ONVO webhook
//! payloads into validated, typed events.
//!
//! ```
//! use onvo_pay::domain::webhook::WebhookDispatcher;
//! use serde_json::json;
//!
//! let response = WebhookDispatcher::new()
//!     .handle(&json!({
//!         "type": "checkout-session.succeeded",
//!         "data": {
//!             "mode": "test", "paymentStatus": "paid", "currency": "USD",
//!             "url": "https://checkout.onvopay.com/s/1", "amountTotal": 1000
//!         }
//!     }))
//!     .unwrap();
//! assert_eq!(response.event_type, "checkout-session.succeeded");
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::onvo::OnvoClient;
pub use domain::webhook::{DecodedEvent, WebhookDispatcher, WebhookError, WebhookResponse};
pub use ports::{ApiError, ApiErrorCode};
