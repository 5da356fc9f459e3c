//! ONVO webhook event decoding.
//!
//! # Module Structure
//!
//! - `dispatcher` - Payload validation and dispatch through the registry
//! - `registry` - Event type string to decoder lookup table
//! - `events` - One typed struct per event kind, plus `DecodedEvent`
//! - `values` - Customer, metadata and error detail value objects
//! - `fields` - Shared presence and coercion rules
//! - `errors` - `WebhookError` and `FieldError`

mod dispatcher;
mod errors;
mod events;
pub mod fields;
mod registry;
mod values;

pub use dispatcher::{WebhookDispatcher, WebhookResponse};
pub use errors::{FieldError, WebhookError};
pub use events::{
    CheckoutSessionSucceeded, DecodeFn, DecodedEvent, EventData, EventKind,
    MobileTransferReceived, PaymentIntentDeferred, PaymentIntentFailed, PaymentIntentSucceeded,
    SubscriptionRenewalFailed, SubscriptionRenewalSucceeded,
};
pub use fields::RawData;
pub use registry::{EventRegistry, EventRegistryBuilder, Lookup};
pub use values::{Customer, ErrorDetail, Metadata};
