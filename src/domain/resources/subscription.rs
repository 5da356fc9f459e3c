//! Subscription (recurring charge) records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringCharge {
    pub id: Option<String>,
    pub billing_cycle_anchor: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub cancel_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    pub canceled_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub current_period_start: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub customer_id: Option<String>,
    pub description: Option<String>,
    pub payment_behavior: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub payment_method_id: Option<String>,
    pub mode: Option<String>,
    pub items: Option<Vec<RecurringItem>>,
    pub trial_period_days: Option<u32>,
    pub trial_start: Option<DateTime<Utc>>,
    pub trial_end: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub latest_invoice: Option<Invoice>,
}

impl RecurringCharge {
    pub fn is_trialing(&self) -> bool {
        self.status.as_deref() == Some("trialing")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringItem {
    pub id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub price_id: Option<String>,
    pub quantity: Option<u32>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Option<String>,
    pub mode: Option<String>,
    pub currency: Option<String>,
    pub attempt_count: Option<u32>,
    pub attempted: Option<bool>,
    pub description: Option<String>,
    pub total: Option<i64>,
    pub subtotal: Option<i64>,
    pub original_total: Option<i64>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_payment_attempt: Option<DateTime<Utc>>,
    pub next_payment_attempt: Option<DateTime<Utc>>,
    pub invoice_additional_items: Option<Vec<InvoiceAdditionalItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceAdditionalItem {
    pub id: Option<String>,
    pub mode: Option<String>,
    pub description: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub quantity: Option<u32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}
