use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hosted checkout session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub billing_address_collection: Option<bool>,
    pub allow_promotion_codes: Option<bool>,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
    /// `open` or `expired`.
    pub status: Option<String>,
    pub line_items: Option<Vec<CheckoutLineItem>>,
    pub mode: Option<String>,
    pub shipping_address_collection: Option<bool>,
    pub shipping_countries: Option<Vec<String>>,
    pub shipping_rates: Option<Vec<String>>,
    /// `paid` or `unpaid`.
    pub payment_status: Option<String>,
    pub payment_intent_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLineItem {
    pub id: Option<String>,
    pub price_id: Option<String>,
    pub quantity: Option<u32>,
    pub unit_amount: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
}
