//! ONVO webhook event variants.
//!
//! Each variant owns its required-field contract and decodes the raw `data`
//! object of a webhook payload into strongly-typed fields. Required fields are
//! checked in declared order before any field is read, so a partially decoded
//! event is never observable.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::errors::FieldError;
use super::fields::{self, RawData};
use super::values::{Customer, ErrorDetail, Metadata};

/// Signature shared by all variant decoders.
pub type DecodeFn = fn(&RawData) -> Result<EventData, FieldError>;

/// Known ONVO webhook event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    PaymentIntentSucceeded,
    PaymentIntentFailed,
    PaymentIntentDeferred,
    SubscriptionRenewalSucceeded,
    SubscriptionRenewalFailed,
    CheckoutSessionSucceeded,
    MobileTransferReceived,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::PaymentIntentSucceeded,
        EventKind::PaymentIntentFailed,
        EventKind::PaymentIntentDeferred,
        EventKind::SubscriptionRenewalSucceeded,
        EventKind::SubscriptionRenewalFailed,
        EventKind::CheckoutSessionSucceeded,
        EventKind::MobileTransferReceived,
    ];

    /// Parse event kind from its wire type string.
    pub fn from_type(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// The wire type string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentIntentSucceeded => "payment-intent.succeeded",
            Self::PaymentIntentFailed => "payment-intent.failed",
            Self::PaymentIntentDeferred => "payment-intent.deferred",
            Self::SubscriptionRenewalSucceeded => "subscription.renewal.succeeded",
            Self::SubscriptionRenewalFailed => "subscription.renewal.failed",
            Self::CheckoutSessionSucceeded => "checkout-session.succeeded",
            Self::MobileTransferReceived => "mobile-transfer.received",
        }
    }

    /// Required fields, in the order they are checked.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::PaymentIntentSucceeded => PaymentIntentSucceeded::REQUIRED_FIELDS,
            Self::PaymentIntentFailed => PaymentIntentFailed::REQUIRED_FIELDS,
            Self::PaymentIntentDeferred => PaymentIntentDeferred::REQUIRED_FIELDS,
            Self::SubscriptionRenewalSucceeded => SubscriptionRenewalSucceeded::REQUIRED_FIELDS,
            Self::SubscriptionRenewalFailed => SubscriptionRenewalFailed::REQUIRED_FIELDS,
            Self::CheckoutSessionSucceeded => CheckoutSessionSucceeded::REQUIRED_FIELDS,
            Self::MobileTransferReceived => MobileTransferReceived::REQUIRED_FIELDS,
        }
    }

    /// The decoder bound to this kind in the default registry.
    pub fn decoder(&self) -> DecodeFn {
        match self {
            Self::PaymentIntentSucceeded => decode_payment_intent_succeeded,
            Self::PaymentIntentFailed => decode_payment_intent_failed,
            Self::PaymentIntentDeferred => decode_payment_intent_deferred,
            Self::SubscriptionRenewalSucceeded => decode_subscription_renewal_succeeded,
            Self::SubscriptionRenewalFailed => decode_subscription_renewal_failed,
            Self::CheckoutSessionSucceeded => decode_checkout_session_succeeded,
            Self::MobileTransferReceived => decode_mobile_transfer_received,
        }
    }
}

fn decode_payment_intent_succeeded(raw: &RawData) -> Result<EventData, FieldError> {
    PaymentIntentSucceeded::decode(raw).map(EventData::PaymentIntentSucceeded)
}

fn decode_payment_intent_failed(raw: &RawData) -> Result<EventData, FieldError> {
    PaymentIntentFailed::decode(raw).map(EventData::PaymentIntentFailed)
}

fn decode_payment_intent_deferred(raw: &RawData) -> Result<EventData, FieldError> {
    PaymentIntentDeferred::decode(raw).map(EventData::PaymentIntentDeferred)
}

fn decode_subscription_renewal_succeeded(raw: &RawData) -> Result<EventData, FieldError> {
    SubscriptionRenewalSucceeded::decode(raw).map(EventData::SubscriptionRenewalSucceeded)
}

fn decode_subscription_renewal_failed(raw: &RawData) -> Result<EventData, FieldError> {
    SubscriptionRenewalFailed::decode(raw).map(EventData::SubscriptionRenewalFailed)
}

fn decode_checkout_session_succeeded(raw: &RawData) -> Result<EventData, FieldError> {
    CheckoutSessionSucceeded::decode(raw).map(EventData::CheckoutSessionSucceeded)
}

fn decode_mobile_transfer_received(raw: &RawData) -> Result<EventData, FieldError> {
    MobileTransferReceived::decode(raw).map(EventData::MobileTransferReceived)
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strongly-typed fields of a decoded event, one arm per kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventData {
    PaymentIntentSucceeded(PaymentIntentSucceeded),
    PaymentIntentFailed(PaymentIntentFailed),
    PaymentIntentDeferred(PaymentIntentDeferred),
    SubscriptionRenewalSucceeded(SubscriptionRenewalSucceeded),
    SubscriptionRenewalFailed(SubscriptionRenewalFailed),
    CheckoutSessionSucceeded(CheckoutSessionSucceeded),
    MobileTransferReceived(MobileTransferReceived),
}

impl EventData {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PaymentIntentSucceeded(_) => EventKind::PaymentIntentSucceeded,
            Self::PaymentIntentFailed(_) => EventKind::PaymentIntentFailed,
            Self::PaymentIntentDeferred(_) => EventKind::PaymentIntentDeferred,
            Self::SubscriptionRenewalSucceeded(_) => EventKind::SubscriptionRenewalSucceeded,
            Self::SubscriptionRenewalFailed(_) => EventKind::SubscriptionRenewalFailed,
            Self::CheckoutSessionSucceeded(_) => EventKind::CheckoutSessionSucceeded,
            Self::MobileTransferReceived(_) => EventKind::MobileTransferReceived,
        }
    }
}

/// A validated webhook event.
///
/// Holds the typed fields alongside the original type string and raw data.
/// Fields are private; the event cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedEvent {
    event_type: String,
    raw: RawData,
    data: EventData,
}

impl DecodedEvent {
    pub(crate) fn new(event_type: String, raw: RawData, data: EventData) -> Self {
        Self {
            event_type,
            raw,
            data,
        }
    }

    /// Type string exactly as received.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn kind(&self) -> EventKind {
        self.data.kind()
    }

    /// The typed fields.
    pub fn data(&self) -> &EventData {
        &self.data
    }

    /// The `data` object exactly as received.
    pub fn raw_data(&self) -> &RawData {
        &self.raw
    }

    pub fn into_parts(self) -> (String, RawData, EventData) {
        (self.event_type, self.raw, self.data)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Variants
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentSucceeded {
    pub id: String,
    pub account_id: String,
    pub currency: String,
    pub amount: i64,
    pub status: String,
    pub confirmation_attempts: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub customer: Customer,
    pub metadata: Option<Metadata>,
}

impl PaymentIntentSucceeded {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "id",
        "accountId",
        "currency",
        "amount",
        "status",
        "confirmationAttempts",
        "description",
        "createdAt",
        "customer",
    ];

    /// Unlike the other variants, a `null` required value counts as absent.
    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        fields::require_fields(raw, Self::REQUIRED_FIELDS, true)?;

        let customer = raw
            .get("customer")
            .ok_or_else(|| FieldError::missing("customer"))?;

        Ok(Self {
            id: fields::required_str(raw, "id")?,
            account_id: fields::required_str(raw, "accountId")?,
            currency: fields::required_str(raw, "currency")?,
            amount: fields::required_int(raw, "amount")?,
            status: fields::required_str(raw, "status")?,
            confirmation_attempts: fields::required_int(raw, "confirmationAttempts")?,
            description: fields::required_str(raw, "description")?,
            created_at: fields::required_timestamp(raw, "createdAt")?,
            customer: Customer::decode_field("customer", customer)?,
            metadata: Metadata::decode_optional(raw)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentFailed {
    pub id: String,
    pub account_id: String,
    pub currency: String,
    pub status: String,
    pub customer: Option<Customer>,
    pub metadata: Option<Metadata>,
    pub error: ErrorDetail,
}

impl PaymentIntentFailed {
    pub const REQUIRED_FIELDS: &'static [&'static str] =
        &["id", "accountId", "currency", "status", "error"];

    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        fields::require_fields(raw, Self::REQUIRED_FIELDS, false)?;

        let id = fields::required_str(raw, "id")?;
        let account_id = fields::required_str(raw, "accountId")?;
        let currency = fields::required_str(raw, "currency")?;
        let status = fields::required_str(raw, "status")?;
        let error = ErrorDetail::decode_required(raw)?;

        Ok(Self {
            id,
            account_id,
            currency,
            status,
            customer: Customer::decode_optional(raw)?,
            metadata: Metadata::decode_optional(raw)?,
            error,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDeferred {
    pub id: String,
    pub mode: String,
    pub currency: String,
    pub status: String,
    pub confirmation_attempts: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub amount: i64,
    pub base_amount: i64,
    pub payment_method_id: String,
    pub customer_id: String,
    pub account_id: String,
}

impl PaymentIntentDeferred {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "id",
        "mode",
        "currency",
        "status",
        "confirmationAttempts",
        "description",
        "createdAt",
        "amount",
        "baseAmount",
        "paymentMethodId",
        "customerId",
        "accountId",
    ];

    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        fields::require_fields(raw, Self::REQUIRED_FIELDS, false)?;

        Ok(Self {
            id: fields::required_str(raw, "id")?,
            mode: fields::required_str(raw, "mode")?,
            currency: fields::required_str(raw, "currency")?,
            status: fields::required_str(raw, "status")?,
            confirmation_attempts: fields::required_int(raw, "confirmationAttempts")?,
            description: fields::required_str(raw, "description")?,
            created_at: fields::required_timestamp(raw, "createdAt")?,
            amount: fields::required_int(raw, "amount")?,
            base_amount: fields::required_int(raw, "baseAmount")?,
            payment_method_id: fields::required_str(raw, "paymentMethodId")?,
            customer_id: fields::required_str(raw, "customerId")?,
            account_id: fields::required_str(raw, "accountId")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRenewalSucceeded {
    pub mode: String,
    pub status: String,
    pub currency: String,
    pub description: String,
    pub total: i64,
    pub period_start: Option<DateTime<Utc>>,
    pub period_end: Option<DateTime<Utc>>,
    pub subscription_id: String,
    pub payment_intent_id: String,
    pub customer_id: String,
}

impl SubscriptionRenewalSucceeded {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "mode",
        "status",
        "currency",
        "description",
        "total",
        "subscriptionId",
        "paymentIntentId",
        "customerId",
    ];

    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        fields::require_fields(raw, Self::REQUIRED_FIELDS, false)?;

        let mode = fields::required_str(raw, "mode")?;
        let status = fields::required_str(raw, "status")?;
        let currency = fields::required_str(raw, "currency")?;
        let description = fields::required_str(raw, "description")?;
        let total = fields::required_int(raw, "total")?;
        let subscription_id = fields::required_str(raw, "subscriptionId")?;
        let payment_intent_id = fields::required_str(raw, "paymentIntentId")?;
        let customer_id = fields::required_str(raw, "customerId")?;

        Ok(Self {
            mode,
            status,
            currency,
            description,
            total,
            period_start: fields::optional_timestamp(raw, "periodStart")?,
            period_end: fields::optional_timestamp(raw, "periodEnd")?,
            subscription_id,
            payment_intent_id,
            customer_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRenewalFailed {
    pub account_id: String,
    pub subscription_id: String,
    pub payment_intent_id: Option<String>,
    pub currency: String,
    pub invoice_status: String,
    pub subscription_status: String,
    pub attempt_count: Option<i64>,
    pub invoice_period_start: DateTime<Utc>,
    pub invoice_period_end: DateTime<Utc>,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub next_payment_attempt: Option<DateTime<Utc>>,
    pub last_payment_attempt: DateTime<Utc>,
    pub customer: Option<Customer>,
    pub error: ErrorDetail,
}

impl SubscriptionRenewalFailed {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "accountId",
        "subscriptionId",
        "currency",
        "invoiceStatus",
        "subscriptionStatus",
        "invoicePeriodStart",
        "invoicePeriodEnd",
        "periodStart",
        "periodEnd",
        "lastPaymentAttempt",
        "error",
    ];

    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        fields::require_fields(raw, Self::REQUIRED_FIELDS, false)?;

        let account_id = fields::required_str(raw, "accountId")?;
        let subscription_id = fields::required_str(raw, "subscriptionId")?;
        let currency = fields::required_str(raw, "currency")?;
        let invoice_status = fields::required_str(raw, "invoiceStatus")?;
        let subscription_status = fields::required_str(raw, "subscriptionStatus")?;
        let invoice_period_start = fields::required_timestamp(raw, "invoicePeriodStart")?;
        let invoice_period_end = fields::required_timestamp(raw, "invoicePeriodEnd")?;
        let period_start = fields::required_timestamp(raw, "periodStart")?;
        let period_end = fields::required_timestamp(raw, "periodEnd")?;
        let last_payment_attempt = fields::required_timestamp(raw, "lastPaymentAttempt")?;
        let error = ErrorDetail::decode_required(raw)?;

        Ok(Self {
            account_id,
            subscription_id,
            payment_intent_id: fields::optional_str(raw, "paymentIntentId")?,
            currency,
            invoice_status,
            subscription_status,
            attempt_count: fields::optional_int(raw, "attemptCount")?,
            invoice_period_start,
            invoice_period_end,
            period_start,
            period_end,
            next_payment_attempt: fields::optional_timestamp(raw, "nextPaymentAttempt")?,
            last_payment_attempt,
            customer: Customer::decode_optional(raw)?,
            error,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSessionSucceeded {
    pub mode: String,
    pub payment_status: String,
    pub currency: String,
    pub url: String,
    pub amount_total: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub metadata: Option<Metadata>,
    pub customer: Option<Customer>,
    pub line_items: Vec<Value>,
}

impl CheckoutSessionSucceeded {
    pub const REQUIRED_FIELDS: &'static [&'static str] =
        &["mode", "paymentStatus", "currency", "url", "amountTotal"];

    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        fields::require_fields(raw, Self::REQUIRED_FIELDS, false)?;

        let mode = fields::required_str(raw, "mode")?;
        let payment_status = fields::required_str(raw, "paymentStatus")?;
        let currency = fields::required_str(raw, "currency")?;
        let url = fields::required_str(raw, "url")?;
        let amount_total = fields::required_int(raw, "amountTotal")?;

        let line_items = match raw.get("lineItems") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(_) => return Err(FieldError::invalid("lineItems", "expected an array")),
        };

        Ok(Self {
            mode,
            payment_status,
            currency,
            url,
            amount_total,
            created_at: fields::optional_timestamp(raw, "createdAt")?,
            metadata: Metadata::decode_optional(raw)?,
            customer: Customer::decode_optional(raw)?,
            line_items,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileTransferReceived {
    pub amount: i64,
    pub currency: String,
    pub description: Option<String>,
    #[serde(rename = "SINPERefNumber")]
    pub sinpe_ref_number: String,
    pub origin_id: String,
    pub origin_name: String,
    pub origin_phone: Option<String>,
    pub authorization_date: DateTime<Utc>,
}

impl MobileTransferReceived {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "amount",
        "currency",
        "SINPERefNumber",
        "originId",
        "originName",
        "authorizationDate",
    ];

    pub fn decode(raw: &RawData) -> Result<Self, FieldError> {
        fields::require_fields(raw, Self::REQUIRED_FIELDS, false)?;

        let amount = fields::required_int(raw, "amount")?;
        let currency = fields::required_str(raw, "currency")?;
        let sinpe_ref_number = fields::required_str(raw, "SINPERefNumber")?;
        let origin_id = fields::required_str(raw, "originId")?;
        let origin_name = fields::required_str(raw, "originName")?;
        let authorization_date = fields::required_timestamp(raw, "authorizationDate")?;

        Ok(Self {
            amount,
            currency,
            description: fields::optional_str(raw, "description")?,
            sinpe_ref_number,
            origin_id,
            origin_name,
            origin_phone: fields::optional_str(raw, "originPhone")?,
            authorization_date,
        })
    }
}
