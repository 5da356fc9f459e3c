//! HTTP handlers for the webhook endpoint.

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::webhook::{WebhookDispatcher, WebhookError, WebhookResponse};

use super::dto::ErrorResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for webhook handlers.
#[derive(Clone, Default)]
pub struct WebhookAppState {
    pub dispatcher: WebhookDispatcher,
}

impl WebhookAppState {
    pub fn new(dispatcher: WebhookDispatcher) -> Self {
        Self { dispatcher }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST <webhook_path> - Validate an incoming ONVO event
///
/// The raw body is parsed here rather than through the `Json` extractor so
/// malformed JSON is reported in the same error shape as other rejections.
pub async fn receive_webhook(
    State(state): State<WebhookAppState>,
    body: Bytes,
) -> Result<Json<WebhookResponse>, WebhookApiError> {
    let response = state.dispatcher.handle_slice(&body)?;

    tracing::info!(event_type = %response.event_type, "Webhook accepted");

    Ok(Json(response))
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Maps `WebhookError` onto HTTP responses.
#[derive(Debug)]
pub struct WebhookApiError(WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let mut body = ErrorResponse::new(self.0.code(), self.0.to_string());
        if let Some(field) = self.0.field() {
            body = body.with_field(field);
        }

        (status, Json(body)).into_response()
    }
}
