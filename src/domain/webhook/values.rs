//! Value objects shared by several webhook event variants.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::errors::FieldError;
use super::fields::{self, RawData};

/// Customer attached to a webhook event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Customer {
    /// Decodes a customer; failures name the nested field (`id`, `email`...).
    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        Ok(Self {
            id: fields::required_str(raw, "id")?,
            name: fields::required_str(raw, "name")?,
            phone: fields::required_str(raw, "phone")?,
            email: fields::required_str(raw, "email")?,
        })
    }

    /// Decodes the `customer` key of an event, failing with `customer.*` paths.
    pub(crate) fn decode_field(field: &str, value: &Value) -> Result<Self, FieldError> {
        let raw = fields::as_object(field, value)?;
        Self::decode(raw).map_err(|e| e.nested_in(field))
    }

    /// Decodes `customer` only when it carries content.
    pub(crate) fn decode_optional(raw: &RawData) -> Result<Option<Self>, FieldError> {
        fields::non_empty(raw, "customer")
            .map(|value| Self::decode_field("customer", value))
            .transpose()
    }
}

/// Free-form string pairs copied from the event's `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Copies every pair; scalar numbers and booleans keep their JSON text.
    ///
    /// Keys holding `null` are left out.
    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        let mut pairs = BTreeMap::new();
        for (key, value) in raw {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                Value::Array(_) | Value::Object(_) => {
                    return Err(FieldError::invalid(key.as_str(), "expected a string value"))
                }
            };
            pairs.insert(key.clone(), text);
        }
        Ok(Self(pairs))
    }

    pub(crate) fn decode_optional(raw: &RawData) -> Result<Option<Self>, FieldError> {
        fields::non_empty(raw, "metadata")
            .map(|value| {
                let map = fields::as_object("metadata", value)?;
                Self::decode(map).map_err(|e| e.nested_in("metadata"))
            })
            .transpose()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Failure details reported with failed payment events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub message: String,
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub payment_method_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ErrorDetail {
    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        Ok(Self {
            message: fields::required_str(raw, "message")?,
            code: fields::optional_str(raw, "code")?,
            error_type: fields::optional_str(raw, "type")?,
            payment_method_type: fields::optional_str(raw, "paymentMethodType")?,
            created_at: fields::required_timestamp(raw, "createdAt")?,
        })
    }

    /// Decodes the required `error` key of an event.
    pub(crate) fn decode_required(raw: &RawData) -> Result<Self, FieldError> {
        let value = raw.get("error").ok_or_else(|| FieldError::missing("error"))?;
        let map = fields::as_object("error", value)?;
        Self::decode(map).map_err(|e| e.nested_in("error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawData {
        value.as_object().cloned().unwrap()
    }

    // ══════════════════════════════════════════════════════════════
    // Customer Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn customer_decodes_all_fields() {
        let customer = Customer::decode(&raw(json!({
            "id": "cus_1", "name": "Jane", "phone": "+50688887777", "email": "jane@example.com"
        })))
        .unwrap();

        assert_eq!(customer.id, "cus_1");
        assert_eq!(customer.name, "Jane");
        assert_eq!(customer.phone, "+50688887777");
        assert_eq!(customer.email, "jane@example.com");
    }

    #[test]
    fn optional_customer_reports_nested_missing_field() {
        let data = raw(json!({"customer": {"id": "cus_1", "name": "Jane", "phone": "1"}}));
        let err = Customer::decode_optional(&data).unwrap_err();
        assert_eq!(err, FieldError::missing("customer.email"));
    }

    #[test]
    fn optional_customer_is_none_when_empty() {
        assert_eq!(Customer::decode_optional(&raw(json!({"customer": {}}))).unwrap(), None);
        assert_eq!(Customer::decode_optional(&raw(json!({"customer": null}))).unwrap(), None);
        assert_eq!(Customer::decode_optional(&raw(json!({}))).unwrap(), None);
    }

    #[test]
    fn customer_that_is_not_an_object_is_invalid() {
        let err = Customer::decode_optional(&raw(json!({"customer": "cus_1"}))).unwrap_err();
        assert_eq!(err.field(), "customer");
        assert!(!err.is_missing());
    }

    // ══════════════════════════════════════════════════════════════
    // Metadata Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn metadata_copies_pairs_verbatim() {
        let metadata = Metadata::decode_optional(&raw(json!({
            "metadata": {"orderId": "ord_9", "attempt": 2, "gift": true}
        })))
        .unwrap()
        .unwrap();

        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata.get("orderId"), Some("ord_9"));
        assert_eq!(metadata.get("attempt"), Some("2"));
        assert_eq!(metadata.get("gift"), Some("true"));
    }

    #[test]
    fn metadata_skips_null_values() {
        let metadata = Metadata::decode_optional(&raw(json!({
            "metadata": {"orderId": "ord_9", "note": null}
        })))
        .unwrap()
        .unwrap();

        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("orderId"), Some("ord_9"));
        assert_eq!(metadata.get("note"), None);
    }

    #[test]
    fn metadata_rejects_nested_values() {
        let err = Metadata::decode_optional(&raw(json!({"metadata": {"items": [1, 2]}})))
            .unwrap_err();
        assert_eq!(err.field(), "metadata.items");
    }

    #[test]
    fn metadata_serializes_as_plain_map() {
        let metadata = Metadata::decode(&raw(json!({"a": "1"}))).unwrap();
        assert_eq!(serde_json::to_value(&metadata).unwrap(), json!({"a": "1"}));
    }

    // ══════════════════════════════════════════════════════════════
    // ErrorDetail Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn error_detail_decodes_optional_fields() {
        let detail = ErrorDetail::decode_required(&raw(json!({
            "error": {
                "message": "Card declined",
                "code": "card_declined",
                "type": "card_error",
                "createdAt": "2024-02-01T12:00:00Z"
            }
        })))
        .unwrap();

        assert_eq!(detail.message, "Card declined");
        assert_eq!(detail.code.as_deref(), Some("card_declined"));
        assert_eq!(detail.error_type.as_deref(), Some("card_error"));
        assert_eq!(detail.payment_method_type, None);
    }

    #[test]
    fn error_detail_requires_message() {
        let err = ErrorDetail::decode_required(&raw(json!({
            "error": {"createdAt": "2024-02-01T12:00:00Z"}
        })))
        .unwrap_err();
        assert_eq!(err, FieldError::missing("error.message"));
    }

    #[test]
    fn error_detail_requires_parsable_created_at() {
        let err = ErrorDetail::decode_required(&raw(json!({
            "error": {"message": "boom", "createdAt": "soon"}
        })))
        .unwrap_err();
        assert_eq!(err.field(), "error.createdAt");
        assert!(!err.is_missing());
    }

    #[test]
    fn error_that_is_not_an_object_is_invalid() {
        let err = ErrorDetail::decode_required(&raw(json!({"error": "boom"}))).unwrap_err();
        assert_eq!(err.field(), "error");
    }
}
