use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, Shipping};

/// Customer record from the customers API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<String>,
    pub amount_spent: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_transaction_at: Option<DateTime<Utc>>,
    pub mode: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub address: Option<Address>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub shipping: Option<Shipping>,
    pub transactions_count: Option<i64>,
}
