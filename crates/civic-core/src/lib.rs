//! # Civic Core
//!
//! The seams of the portal API client: the transport and tenant ports,
//! client configuration, and the error types. No I/O lives here.

pub mod config;
pub mod error;
pub mod ports;

pub use config::ClientConfig;
pub use error::{ClientError, TransportError};
