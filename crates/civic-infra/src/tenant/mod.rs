//! Tenant providers - fixed values, the environment, and local stores.

mod file;
mod memory;

use std::env;

use civic_core::ports::TenantProvider;

pub use file::{JsonFileTenantStore, TenantStoreError};
pub use memory::InMemoryTenantStore;

/// Environment variable [`EnvTenant`] reads by default.
pub const TENANT_ID_ENV: &str = "TENANT_ID";

/// Provider for contexts with no tenant at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTenant;

impl TenantProvider for NoTenant {
    fn tenant_id(&self) -> Option<String> {
        None
    }
}

/// Provider that always answers with the same tenant.
#[derive(Debug, Clone)]
pub struct FixedTenant(String);

impl FixedTenant {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self(tenant_id.into())
    }
}

impl TenantProvider for FixedTenant {
    fn tenant_id(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Provider that reads an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvTenant {
    var: String,
}

impl EnvTenant {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvTenant {
    fn default() -> Self {
        Self::new(TENANT_ID_ENV)
    }
}

impl TenantProvider for EnvTenant {
    fn tenant_id(&self) -> Option<String> {
        env::var(&self.var).ok().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tenant() {
        assert_eq!(NoTenant.tenant_id(), None);
    }

    #[test]
    fn test_fixed_tenant() {
        assert_eq!(
            FixedTenant::new("battambang").tenant_id().as_deref(),
            Some("battambang")
        );
    }

    #[test]
    fn test_env_tenant_unset_variable() {
        let provider = EnvTenant::new("CIVIC_INFRA_TEST_TENANT_NEVER_SET");

        assert_eq!(provider.tenant_id(), None);
    }

    #[test]
    fn test_env_tenant_set_variable() {
        // SAFETY: the variable name is unique to this test.
        unsafe { env::set_var("CIVIC_INFRA_TEST_TENANT_SET", "preah-vihear") };

        let provider = EnvTenant::new("CIVIC_INFRA_TEST_TENANT_SET");

        assert_eq!(provider.tenant_id().as_deref(), Some("preah-vihear"));
    }

    #[test]
    fn test_env_tenant_blank_variable() {
        // SAFETY: the variable name is unique to this test.
        unsafe { env::set_var("CIVIC_INFRA_TEST_TENANT_BLANK", "   ") };

        let provider = EnvTenant::new("CIVIC_INFRA_TEST_TENANT_BLANK");

        assert_eq!(provider.tenant_id(), None);
    }
}
