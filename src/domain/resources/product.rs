//! Product catalogue records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_shippable: Option<bool>,
    pub name: Option<String>,
    pub package_dimensions: Option<PackageDimensions>,
    pub mode: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Package size; weight is in grams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDimensions {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: Option<String>,
    pub unit_amount: Option<i64>,
    pub currency: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub nickname: Option<String>,
    pub is_active: Option<bool>,
    pub product_id: Option<String>,
    pub recurring: Option<Recurring>,
    pub mode: Option<String>,
    /// `one_time` or `recurring`.
    #[serde(rename = "type")]
    pub price_type: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Price {
    pub fn is_recurring(&self) -> bool {
        self.price_type.as_deref() == Some("recurring")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurring {
    pub interval: Option<String>,
    pub interval_count: Option<u32>,
}
