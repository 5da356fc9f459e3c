//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ApiTransport` - Requests against the ONVO REST API

mod api_transport;

pub use api_transport::{ApiError, ApiErrorCode, ApiTransport};
