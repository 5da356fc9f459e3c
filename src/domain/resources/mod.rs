//! ONVO API resources.
//!
//! Plain records decoded from API responses. Every member the API may omit is
//! optional and populated field by field from the camelCase JSON.

mod checkout_session;
mod common;
mod customer;
mod payment_intent;
mod payment_method;
mod product;
mod refund;
mod shipping_rate;
mod subscription;

pub use checkout_session::{CheckoutLineItem, CheckoutSession};
pub use common::{Address, ListResponse, Shipping};
pub use customer::Customer;
pub use payment_intent::{Charge, LastPaymentError, NextAction, PaymentIntent, RedirectToUrl};
pub use payment_method::{Billing, Card, MobileNumber, PaymentMethod, Zunify};
pub use product::{PackageDimensions, Price, Product, Recurring};
pub use refund::Refund;
pub use shipping_rate::{DeliveryEstimate, ShippingRate};
pub use subscription::{Invoice, InvoiceAdditionalItem, RecurringCharge, RecurringItem};
