//! Ports - trait definitions for external dependencies.
//! Adapters in `civic-infra` implement these.

mod tenant;
mod transport;

pub use tenant::TenantProvider;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};
