use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRate {
    pub id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub display_name: Option<String>,
    pub is_active: Option<bool>,
    pub delivery_estimate: Option<DeliveryEstimate>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Delivery window; units are `hours` or `days`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryEstimate {
    pub minimum_unit: Option<String>,
    pub minimum_value: Option<i64>,
    pub maximum_unit: Option<String>,
    pub maximum_value: Option<i64>,
}
