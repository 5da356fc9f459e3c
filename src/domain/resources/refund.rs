use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub payment_intent_id: Option<String>,
    pub description: Option<String>,
    pub mode: Option<String>,
    /// `pending`, `succeeded` or `failed`.
    pub status: Option<String>,
    /// `requested_by_customer`, `fraudulent` or `duplicate`.
    pub reason: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub failure_reason: Option<String>,
}
