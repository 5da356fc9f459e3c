//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `onvo` - ONVO REST API client (reqwest transport, services, mock)
//! - `http` - axum endpoint receiving ONVO webhooks

pub mod http;
pub mod onvo;

pub use onvo::{MockTransport, OnvoClient, OnvoHttpTransport};
