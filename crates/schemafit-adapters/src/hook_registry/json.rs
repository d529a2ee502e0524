//! Hook registry persisted in the host framework's hooks document.
//!
//! The host keeps module hooks in a JSON array under the project directory.
//! Registration is a read-modify-write of that array: a record whose
//! (module, hooked generator) key already exists is updated in place,
//! everything else is appended. The file and its directory are created on
//! first registration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use schemafit_core::{
    application::{ApplicationError, ports::HookRegistry},
    domain::ModuleHookRecord,
    error::{SchemafitError, SchemafitResult},
};

/// Hooks document location, relative to the project directory.
pub const HOOKS_FILE_PATH: &str = ".jhipster/modules/jhi-hooks.json";

/// One entry in the hooks document, in the host's wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HookEntry {
    name: String,
    npm_package_name: String,
    description: String,
    hook_for: String,
    hook_type: String,
    generator_callback: String,
}

impl From<&ModuleHookRecord> for HookEntry {
    fn from(record: &ModuleHookRecord) -> Self {
        Self {
            name: record.module_name().to_string(),
            npm_package_name: record.module_name().to_string(),
            description: record.description().to_string(),
            hook_for: record.hooked_generator().as_str().to_string(),
            hook_type: record.timing().as_str().to_string(),
            generator_callback: record.generator_callback(),
        }
    }
}

/// Production registry writing the host's hooks document.
#[derive(Debug, Clone)]
pub struct JsonHookRegistry {
    hooks_path: PathBuf,
}

impl JsonHookRegistry {
    /// Registry for the project rooted at `project_dir`.
    pub fn new(project_dir: &Path) -> Self {
        Self {
            hooks_path: project_dir.join(HOOKS_FILE_PATH),
        }
    }

    pub fn hooks_path(&self) -> &Path {
        &self.hooks_path
    }

    fn failure(&self, record: &ModuleHookRecord, reason: impl Into<String>) -> SchemafitError {
        ApplicationError::RegistrationFailure {
            module: record.module_name().to_string(),
            reason: reason.into(),
        }
        .into()
    }

    fn read_entries(&self, record: &ModuleHookRecord) -> SchemafitResult<Vec<HookEntry>> {
        if !self.hooks_path.exists() {
            return Ok(Vec::new());
        }
        let text = std::fs::read_to_string(&self.hooks_path)
            .map_err(|e| self.failure(record, format!("cannot read hooks file: {e}")))?;
        serde_json::from_str(&text)
            .map_err(|e| self.failure(record, format!("hooks file is malformed: {e}")))
    }
}

impl HookRegistry for JsonHookRegistry {
    fn register(&self, record: &ModuleHookRecord) -> SchemafitResult<()> {
        let mut entries = self.read_entries(record)?;
        let entry = HookEntry::from(record);

        // Upsert on the (module, generator) key.
        match entries.iter_mut().find(|e| {
            e.npm_package_name == entry.npm_package_name && e.hook_for == entry.hook_for
        }) {
            Some(existing) => {
                debug!(hook = %record, "Updating existing hook entry");
                *existing = entry;
            }
            None => entries.push(entry),
        }

        if let Some(parent) = self.hooks_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| self.failure(record, format!("cannot create hooks directory: {e}")))?;
        }
        let text = serde_json::to_string_pretty(&entries)
            .map_err(|e| self.failure(record, format!("cannot serialize hooks: {e}")))?;
        std::fs::write(&self.hooks_path, text)
            .map_err(|e| self.failure(record, format!("cannot write hooks file: {e}")))?;

        debug!(hook = %record, path = %self.hooks_path.display(), "Hook persisted");
        Ok(())
    }
}
