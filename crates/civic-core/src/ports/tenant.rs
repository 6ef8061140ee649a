//! Tenant lookup port.

use std::sync::Arc;

/// Supplies the tenant a client acts on behalf of.
///
/// Clients read this once when they are built.
pub trait TenantProvider: Send + Sync {
    /// The current tenant identifier, if one is known.
    fn tenant_id(&self) -> Option<String>;
}

impl<T: TenantProvider + ?Sized> TenantProvider for Arc<T> {
    fn tenant_id(&self) -> Option<String> {
        (**self).tenant_id()
    }
}

impl<T: TenantProvider + ?Sized> TenantProvider for &T {
    fn tenant_id(&self) -> Option<String> {
        (**self).tenant_id()
    }
}
