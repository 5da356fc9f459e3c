//! Route configuration for the webhook endpoint.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, receive_webhook, WebhookAppState};

/// Creates the webhook router.
///
/// Routes:
/// - `POST {webhook_path}` - Receive an ONVO event
/// - `GET /health` - Liveness probe
pub fn webhook_router(webhook_path: &str) -> Router<WebhookAppState> {
    Router::new()
        .route(webhook_path, post(receive_webhook))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::webhook::{EventRegistry, WebhookDispatcher};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const PATH: &str = "/webhooks/onvo";

    fn app() -> Router {
        webhook_router(PATH).with_state(WebhookAppState::default())
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(PATH)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn valid_event_echoes_type_and_data() {
        let payload = json!({
            "type": "subscription.renewal.succeeded",
            "data": {
                "mode": "test", "status": "succeeded", "currency": "USD",
                "description": "Monthly plan", "total": 1999,
                "subscriptionId": "sub_1", "paymentIntentId": "pi_1",
                "customerId": "cus_1", "vendorField": [1, 2]
            }
        });

        let response = app()
            .oneshot(post_json(payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, payload);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let response = app().oneshot(post_json("{oops")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_PAYLOAD");
    }

    #[tokio::test]
    async fn unknown_event_is_bad_request() {
        let body = json!({"type": "unknown.event", "data": {}}).to_string();
        let response = app().oneshot(post_json(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "UNKNOWN_EVENT_TYPE");
        assert!(json.get("field").is_none());
    }

    #[tokio::test]
    async fn validation_failure_reports_field() {
        let body = json!({
            "type": "payment-intent.deferred",
            "data": {"id": "pi_1", "mode": "test", "currency": "USD", "status": "deferred"}
        })
        .to_string();
        let response = app().oneshot(post_json(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["field"], "confirmationAttempts");
    }

    #[tokio::test]
    async fn reserved_event_is_server_error() {
        let registry = EventRegistry::builder().reserve("refund.succeeded").build();
        let app = webhook_router(PATH)
            .with_state(WebhookAppState::new(WebhookDispatcher::with_registry(registry)));

        let body = json!({"type": "refund.succeeded", "data": {}}).to_string();
        let response = app.oneshot(post_json(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["code"], "DECODER_UNAVAILABLE");
    }

    #[tokio::test]
    async fn custom_path_is_honoured() {
        let app = webhook_router("/hooks").with_state(WebhookAppState::default());
        let body = json!({"type": "unknown.event", "data": {}}).to_string();
        let request = Request::builder()
            .method("POST")
            .uri("/hooks")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
