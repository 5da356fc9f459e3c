//! HTTP adapter for receiving ONVO webhooks.
//!
//! Exposes the webhook dispatcher via REST API:
//! - `POST <webhook_path>` - Validate an ONVO event and echo `{type, data}`
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{WebhookApiError, WebhookAppState};
pub use routes::webhook_router;
