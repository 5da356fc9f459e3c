use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Address;

/// Stored payment method: card, SINPE mobile number or Zunify account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: Option<String>,
    pub billing: Option<Billing>,
    pub card: Option<Card>,
    pub created_at: Option<DateTime<Utc>>,
    pub customer_id: Option<String>,
    pub mobile_number: Option<MobileNumber>,
    pub zunify: Option<Zunify>,
    pub mode: Option<String>,
    /// `active`, `detached` or `suspended`.
    pub status: Option<String>,
    /// `card`, `mobile_number` or `zunify`.
    #[serde(rename = "type")]
    pub method_type: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billing {
    pub address: Option<Address>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub brand: Option<String>,
    pub country: Option<String>,
    #[serde(alias = "expiryMonth")]
    pub exp_month: Option<u32>,
    #[serde(alias = "expiryYear")]
    pub exp_year: Option<u32>,
    pub last4: Option<String>,
    /// `credit` or `debit`.
    pub funding: Option<String>,
    pub cvv: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileNumber {
    pub masked_number: Option<String>,
    pub identification: Option<String>,
    pub identification_type: Option<i64>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zunify {
    pub masked_number: Option<String>,
    pub phone_number: Option<String>,
    pub pin: Option<String>,
}
