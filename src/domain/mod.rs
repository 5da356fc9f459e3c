//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `webhook` - ONVO webhook event registry, decoders and dispatcher
//! - `resources` - Records returned by the ONVO REST API

pub mod resources;
pub mod webhook;
