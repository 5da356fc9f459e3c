//! Webhook dispatcher - validates a raw payload against the event registry.
//!
//! ## Design
//!
//! The dispatcher follows these steps, failing fast on the first problem:
//! 1. `type` must be a non-empty string
//! 2. `data` must be an object
//! 3. `type` must be registered
//! 4. the registered entry must have a decoder bound
//! 5. the decoder validates `data` and builds the typed event
//!
//! The dispatcher is stateless apart from its read-only registry, so a single
//! instance can be shared across threads and tasks.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::WebhookError;
use super::events::DecodedEvent;
use super::fields::RawData;
use super::registry::{EventRegistry, Lookup};

/// Normalized result of handling a webhook: the type and the validated raw data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookResponse {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: RawData,
}

impl WebhookResponse {
    /// Renders the response as pretty-printed JSON.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<DecodedEvent> for WebhookResponse {
    fn from(event: DecodedEvent) -> Self {
        let (event_type, data, _) = event.into_parts();
        Self { event_type, data }
    }
}

/// Resolves raw webhook payloads to validated events.
#[derive(Debug, Clone)]
pub struct WebhookDispatcher {
    registry: Arc<EventRegistry>,
}

impl WebhookDispatcher {
    /// Dispatcher over the standard ONVO event kinds.
    pub fn new() -> Self {
        Self::with_registry(EventRegistry::default())
    }

    pub fn with_registry(registry: EventRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// Validates the payload and returns its type and untouched `data`.
    ///
    /// The typed fields are computed for validation and then dropped; use
    /// [`WebhookDispatcher::decode`] to keep them.
    pub fn handle(&self, payload: &Value) -> Result<WebhookResponse, WebhookError> {
        self.decode(payload).map(WebhookResponse::from)
    }

    /// Parses JSON bytes and handles the resulting payload.
    pub fn handle_slice(&self, body: &[u8]) -> Result<WebhookResponse, WebhookError> {
        let payload: Value = serde_json::from_slice(body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse webhook body");
            WebhookError::invalid_payload(format!("body is not valid JSON: {}", e))
        })?;
        self.handle(&payload)
    }

    /// Validates the payload and returns the typed event.
    pub fn decode(&self, payload: &Value) -> Result<DecodedEvent, WebhookError> {
        let result = self.decode_inner(payload);
        match &result {
            Ok(event) => {
                tracing::debug!(event_type = %event.event_type(), "Webhook event decoded");
            }
            Err(e) => {
                tracing::warn!(
                    error_code = e.code(),
                    event_type = e.event_type().unwrap_or_default(),
                    field = e.field().unwrap_or_default(),
                    "Webhook payload rejected: {}",
                    e
                );
            }
        }
        result
    }

    fn decode_inner(&self, payload: &Value) -> Result<DecodedEvent, WebhookError> {
        let event_type = match payload.get("type") {
            Some(Value::String(t)) if !t.is_empty() => t.as_str(),
            Some(Value::String(_)) | None | Some(Value::Null) => {
                return Err(WebhookError::invalid_payload("`type` and `data` are required"))
            }
            Some(_) => return Err(WebhookError::invalid_payload("`type` must be a string")),
        };

        let data = match payload.get("data") {
            Some(Value::Object(data)) => data,
            None | Some(Value::Null) => {
                return Err(WebhookError::invalid_payload("`type` and `data` are required"))
            }
            Some(_) => return Err(WebhookError::invalid_payload("`data` must be an object")),
        };

        let decoder = match self.registry.lookup(event_type) {
            Lookup::Decoder(decoder) => decoder,
            Lookup::Unbound => {
                return Err(WebhookError::DecoderUnavailable(event_type.to_string()))
            }
            Lookup::Unknown => return Err(WebhookError::UnknownEventType(event_type.to_string())),
        };

        let typed = decoder(data).map_err(|e| WebhookError::validation(event_type, e))?;

        Ok(DecodedEvent::new(event_type.to_string(), data.clone(), typed))
    }
}

impl Default for WebhookDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
