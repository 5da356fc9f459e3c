//! Integration tests for the HTTP transport against a mock ONVO server.
//!
//! These tests verify:
//! 1. Requests carry the bearer key, JSON body and query pairs
//! 2. Responses decode into typed resources
//! 3. HTTP failures map onto `ApiError` codes

use mockito::Matcher;
use serde_json::json;

use onvo_pay::adapters::onvo::{OnvoClient, OnvoHttpTransport};
use onvo_pay::config::ClientConfig;
use onvo_pay::ports::{ApiErrorCode, ApiTransport};

const API_KEY: &str = "onvo_test_integration_key";

fn client_for(server: &mockito::ServerGuard) -> OnvoClient {
    let config = ClientConfig::new(API_KEY).with_base_url(server.url());
    OnvoClient::new(&config).unwrap()
}

// =============================================================================
// Request Shape
// =============================================================================

#[tokio::test]
async fn sends_bearer_key_and_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/payment-intents")
        .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"amount": 1000, "currency": "USD"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "pi_1", "amount": 1000, "currency": "USD", "status": "requires_payment_method"}"#)
        .create_async()
        .await;

    let intent = client_for(&server)
        .payment_intents()
        .create(&json!({"amount": 1000, "currency": "USD"}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(intent.id.as_deref(), Some("pi_1"));
    assert_eq!(intent.amount, Some(1000));
}

#[tokio::test]
async fn list_passes_query_pairs() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/products")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("startingAfter".into(), "prod_9".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data": [{"id": "prod_10"}, {"id": "prod_11"}], "hasMore": true, "totalCount": 40}"#)
        .create_async()
        .await;

    let page = client_for(&server)
        .products()
        .list(&[("limit", "2"), ("startingAfter", "prod_9")])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.data.len(), 2);
    assert!(page.has_more);
    assert_eq!(page.total(), 40);
}

#[tokio::test]
async fn timestamps_decode_as_utc() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/refunds/re_1")
        .with_status(200)
        .with_body(r#"{"id": "re_1", "amount": 500, "createdAt": "2024-03-01T12:30:00.000Z", "status": "succeeded"}"#)
        .create_async()
        .await;

    let refund = client_for(&server).refunds().retrieve("re_1").await.unwrap();

    let created = refund.created_at.unwrap();
    assert_eq!(created.to_rfc3339(), "2024-03-01T12:30:00+00:00");
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/subscriptions/sub_1/items/si_1")
        .with_status(204)
        .create_async()
        .await;

    let removed = client_for(&server)
        .subscriptions()
        .remove_item("sub_1", "si_1")
        .await
        .unwrap();
    assert!(removed.is_null());

    let transport =
        OnvoHttpTransport::new(&ClientConfig::new(API_KEY).with_base_url(server.url())).unwrap();
    let value = transport.delete("/subscriptions/sub_1/items/si_1").await.unwrap();
    assert!(value.is_null());
}

// =============================================================================
// Error Mapping
// =============================================================================

#[tokio::test]
async fn unauthorized_maps_to_authentication() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/customers/cus_1")
        .with_status(401)
        .with_body(r#"{"statusCode": 401, "message": "Invalid API key", "apiCode": "unauthorized"}"#)
        .create_async()
        .await;

    let err = client_for(&server).customers().retrieve("cus_1").await.unwrap_err();

    assert_eq!(err.code, ApiErrorCode::Authentication);
    assert_eq!(err.status, Some(401));
    assert_eq!(err.message, "Invalid API key");
    assert_eq!(err.provider_code.as_deref(), Some("unauthorized"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn validation_errors_use_first_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/customers")
        .with_status(400)
        .with_body(r#"{"message": ["email must be an email", "name is too long"]}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .customers()
        .create(&json!({"email": "nope"}))
        .await
        .unwrap_err();

    assert_eq!(err.code, ApiErrorCode::InvalidRequest);
    assert_eq!(err.message, "email must be an email");
}

#[tokio::test]
async fn not_found_maps_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/prices/price_x")
        .with_status(404)
        .with_body(r#"{"message": "Price not found"}"#)
        .create_async()
        .await;

    let err = client_for(&server).prices().retrieve("price_x").await.unwrap_err();
    assert_eq!(err.code, ApiErrorCode::NotFound);
}

#[tokio::test]
async fn server_errors_are_retryable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/shipping-rates")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let err = client_for(&server).shipping_rates().list(&[]).await.unwrap_err();

    assert_eq!(err.code, ApiErrorCode::Provider);
    assert_eq!(err.message, "Service Unavailable");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn non_json_success_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/payment-methods/pm_1")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .payment_methods()
        .retrieve("pm_1")
        .await
        .unwrap_err();

    assert_eq!(err.code, ApiErrorCode::InvalidResponse);
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    // Nothing listens on port 1
    let config = ClientConfig::new(API_KEY)
        .with_base_url("http://127.0.0.1:1")
        .with_timeout_secs(2);
    let client = OnvoClient::new(&config).unwrap();

    let err = client.customers().list(&[]).await.unwrap_err();

    assert_eq!(err.code, ApiErrorCode::Network);
    assert_eq!(err.status, None);
    assert!(err.is_retryable());
}
