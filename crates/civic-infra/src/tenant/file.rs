//! JSON-file tenant store - the on-disk counterpart of browser local storage.
//!
//! The file holds one JSON object; the tenant lives under the `tenantId`
//! key. Other keys are preserved on write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use civic_core::ports::TenantProvider;

/// Key the tenant identifier is stored under.
pub const TENANT_KEY: &str = "tenantId";

/// Tenant store errors.
#[derive(Debug, thiserror::Error)]
pub enum TenantStoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Storage file is not a JSON object: {0}")]
    Malformed(String),
}

/// Tenant store persisted as a JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileTenantStore {
    path: PathBuf,
}

impl JsonFileTenantStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `tenant_id`, creating the file if needed.
    pub fn save(&self, tenant_id: &str) -> Result<(), TenantStoreError> {
        let mut entries = self.load()?;
        entries.insert(TENANT_KEY.to_string(), Value::String(tenant_id.to_string()));
        self.store(&entries)
    }

    /// Remove the tenant key, leaving any other entries in place.
    pub fn clear(&self) -> Result<(), TenantStoreError> {
        let mut entries = self.load()?;
        if entries.remove(TENANT_KEY).is_some() {
            self.store(&entries)?;
        }
        Ok(())
    }

    /// Read the tenant, distinguishing "absent" from "unreadable".
    pub fn read(&self) -> Result<Option<String>, TenantStoreError> {
        let entries = self.load()?;
        Ok(entries
            .get(TENANT_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn load(&self) -> Result<Map<String, Value>, TenantStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(other) => Err(TenantStoreError::Malformed(format!(
                "expected object, found {}",
                json_kind(&other)
            ))),
            Err(e) => Err(TenantStoreError::Malformed(e.to_string())),
        }
    }

    fn store(&self, entries: &Map<String, Value>) -> Result<(), TenantStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| TenantStoreError::Malformed(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl TenantProvider for JsonFileTenantStore {
    fn tenant_id(&self) -> Option<String> {
        match self.read() {
            Ok(tenant) => tenant,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable tenant store");
                None
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
