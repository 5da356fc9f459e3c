//! Payment intent records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub id: Option<String>,
    /// Amount in minor currency units.
    pub amount: Option<i64>,
    pub base_amount: Option<i64>,
    pub exchange_rate: Option<f64>,
    pub capturable_amount: Option<i64>,
    pub received_amount: Option<i64>,
    /// `manual` or `automatic`.
    pub capture_method: Option<String>,
    pub currency: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub customer_id: Option<String>,
    pub description: Option<String>,
    pub charges: Option<Vec<Charge>>,
    pub last_payment_error: Option<LastPaymentError>,
    pub mode: Option<String>,
    pub status: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Merchant key/value pairs; values are kept as sent.
    pub metadata: Option<Map<String, Value>>,
    pub office_id: Option<String>,
    pub on_behalf_of: Option<String>,
    pub next_action: Option<NextAction>,
}

impl PaymentIntent {
    /// Returns true once the intent has been paid.
    pub fn is_succeeded(&self) -> bool {
        self.status.as_deref() == Some("succeeded")
    }

    /// Returns true if the customer must complete a redirect.
    pub fn requires_action(&self) -> bool {
        self.next_action.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Error from the most recent payment attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastPaymentError {
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    #[serde(rename = "type")]
    pub action_type: Option<String>,
    pub redirect_to_url: Option<RedirectToUrl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectToUrl {
    pub url: Option<String>,
    pub return_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_payment_intent_with_nested_records() {
        let intent: PaymentIntent = serde_json::from_value(json!({
            "id": "pi_1",
            "amount": 1000,
            "exchangeRate": 520.5,
            "captureMethod": "automatic",
            "currency": "USD",
            "status": "requires_action",
            "charges": [{"id": "ch_1", "amount": 1000, "status": "pending"}],
            "lastPaymentError": {"code": "card_declined", "type": "card_error"},
            "nextAction": {
                "type": "redirect_to_url",
                "redirectToUrl": {"url": "https://3ds", "returnUrl": "https://shop"}
            },
            "metadata": {"orderId": "12"}
        }))
        .unwrap();

        assert_eq!(intent.exchange_rate, Some(520.5));
        assert_eq!(intent.charges.as_ref().unwrap().len(), 1);
        assert_eq!(
            intent.last_payment_error.as_ref().unwrap().error_type.as_deref(),
            Some("card_error")
        );
        assert_eq!(intent.metadata.as_ref().unwrap()["orderId"], "12");
        assert!(intent.requires_action());
        assert!(!intent.is_succeeded());
        let redirect = intent.next_action.unwrap().redirect_to_url.unwrap();
        assert_eq!(redirect.return_url.as_deref(), Some("https://shop"));
    }
}
