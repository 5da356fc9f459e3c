//! Webhook error types for ONVO webhook decoding.
//!
//! Defines every failure the dispatcher can report, so callers can branch on
//! the kind of failure instead of parsing messages.

use thiserror::Error;

/// A single field that failed validation inside an event payload.
///
/// Field names use the wire spelling (`confirmationAttempts`), with nested
/// fields joined by a dot (`error.createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required field is absent from the payload.
    #[error("missing field `{field}`")]
    Missing { field: String },

    /// Field is present but could not be coerced to its declared type.
    #[error("invalid field `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        FieldError::Missing {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FieldError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            FieldError::Missing { field } | FieldError::Invalid { field, .. } => field,
        }
    }

    /// Returns true if the field was absent rather than malformed.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldError::Missing { .. })
    }

    /// Prefixes the field name with the enclosing object's key.
    pub(crate) fn nested_in(self, parent: &str) -> Self {
        match self {
            FieldError::Missing { field } => FieldError::Missing {
                field: format!("{}.{}", parent, field),
            },
            FieldError::Invalid { field, reason } => FieldError::Invalid {
                field: format!("{}.{}", parent, field),
                reason,
            },
        }
    }
}

/// Errors that occur while handling a webhook payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// Top-level `type` or `data` is missing or malformed.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The event type is not registered.
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    /// The event type is registered but no decoder is bound to it.
    #[error("No decoder available for event type: {0}")]
    DecoderUnavailable(String),

    /// The event data failed its variant's field contract.
    #[error("Validation failed for {event_type}: {source}")]
    ValidationFailed {
        event_type: String,
        #[source]
        source: FieldError,
    },
}

impl WebhookError {
    pub(crate) fn invalid_payload(reason: impl Into<String>) -> Self {
        WebhookError::InvalidPayload(reason.into())
    }

    pub(crate) fn validation(event_type: impl Into<String>, source: FieldError) -> Self {
        WebhookError::ValidationFailed {
            event_type: event_type.into(),
            source,
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            WebhookError::InvalidPayload(_) => "INVALID_PAYLOAD",
            WebhookError::UnknownEventType(_) => "UNKNOWN_EVENT_TYPE",
            WebhookError::DecoderUnavailable(_) => "DECODER_UNAVAILABLE",
            WebhookError::ValidationFailed { .. } => "VALIDATION_FAILED",
        }
    }

    /// The offending field, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            WebhookError::ValidationFailed { source, .. } => Some(source.field()),
            _ => None,
        }
    }

    /// The event type the error refers to, when one was resolved.
    pub fn event_type(&self) -> Option<&str> {
        match self {
            WebhookError::UnknownEventType(t) | WebhookError::DecoderUnavailable(t) => Some(t),
            WebhookError::ValidationFailed { event_type, .. } => Some(event_type),
            WebhookError::InvalidPayload(_) => None,
        }
    }

    /// Returns true if the payload itself is at fault.
    ///
    /// `DecoderUnavailable` is a registry misconfiguration, not a data error.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, WebhookError::DecoderUnavailable(_))
    }
}
