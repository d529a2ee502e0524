//! In-memory hook registry for tests.

use std::sync::{Arc, RwLock};

use schemafit_core::{
    application::{ApplicationError, ports::HookRegistry},
    domain::ModuleHookRecord,
    error::SchemafitResult,
};

/// Registry backed by a shared `Vec`, with the same upsert semantics as the
/// JSON adapter. `rejecting()` builds one that fails every registration, for
/// exercising the best-effort paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryHookRegistry {
    records: Arc<RwLock<Vec<ModuleHookRecord>>>,
    reject: bool,
}

impl MemoryHookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that refuses every registration.
    pub fn rejecting() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            reject: true,
        }
    }

    /// Snapshot of everything registered so far.
    pub fn records(&self) -> Vec<ModuleHookRecord> {
        self.records.read().expect("registry lock poisoned").clone()
    }
}

impl HookRegistry for MemoryHookRegistry {
    fn register(&self, record: &ModuleHookRecord) -> SchemafitResult<()> {
        if self.reject {
            return Err(ApplicationError::RegistrationFailure {
                module: record.module_name().to_string(),
                reason: "registry rejects all hooks".into(),
            }
            .into());
        }

        let mut records = self.records.write().expect("registry lock poisoned");
        match records.iter_mut().find(|r| r.registry_key() == record.registry_key()) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }
}
