//! # Civic Client
//!
//! Async client for the population management REST backend.
//!
//! Every operation goes through one request helper that attaches the JSON
//! content type and the `x-tenant-id` header, and turns non-2xx statuses
//! into [`ClientError::Http`].
//!
//! ```rust,ignore
//! use civic_client::ApiClient;
//!
//! let client = ApiClient::from_env();
//! let matches = client.search_citizens("Sok Dara").await?;
//! ```

mod client;
mod options;
mod path;

pub use client::{ApiClient, ApiClientBuilder, TENANT_HEADER};
pub use options::RequestOptions;

pub use civic_core::{ClientConfig, ClientError, TransportError};
pub use civic_types::{ApiError, AuthResponse, Citizen, LoginRequest, RegisterRequest, User};
