//! In-memory tenant store - process-local, lost on restart.

use std::sync::RwLock;

use civic_core::ports::TenantProvider;

/// Mutable tenant slot shared within one process.
#[derive(Debug, Default)]
pub struct InMemoryTenantStore {
    slot: RwLock<Option<String>>,
}

impl InMemoryTenantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tenant(tenant_id: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(tenant_id.into())),
        }
    }

    pub fn set(&self, tenant_id: impl Into<String>) {
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(tenant_id.into());
    }

    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl TenantProvider for InMemoryTenantStore {
    fn tenant_id(&self) -> Option<String> {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
