//! # Civic Infrastructure
//!
//! Concrete implementations of the ports defined in `civic-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external HTTP stack, in-memory adapters only
//! - `http` - `reqwest`-backed transport

pub mod tenant;
pub mod transport;

// Re-exports - In-Memory
pub use tenant::{
    EnvTenant, FixedTenant, InMemoryTenantStore, JsonFileTenantStore, NoTenant, TenantStoreError,
};
pub use transport::StubTransport;

#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
