//! Configuration sources backed by named test fixtures.
//!
//! A fixture is a version-controlled `.yo-rc.json` standing in for a live
//! project configuration. The catalog maps identifiers to files; a run
//! flagged with a test-case id reads the fixture and never touches the live
//! document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use schemafit_core::{
    application::{ApplicationError, ports::ConfigSource},
    domain::GeneratorContext,
    error::SchemafitResult,
};

use super::document::{CONFIG_FILE_NAME, ProjectDocument};

/// Identifiers shipped with this repository, rooted at `fixtures/`.
const BUILTIN_IDS: [&str; 2] = ["maven-app", "gradle-app"];

/// Static, read-only mapping from test-case identifier to fixture path.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    entries: BTreeMap<String, PathBuf>,
}

impl FixtureCatalog {
    /// The catalog of fixtures shipped under `<root>/fixtures/`.
    pub fn builtin(root: &Path) -> Self {
        let entries = BUILTIN_IDS
            .iter()
            .map(|id| {
                (
                    id.to_string(),
                    root.join("fixtures").join(id).join(CONFIG_FILE_NAME),
                )
            })
            .collect();
        Self { entries }
    }

    /// An empty catalog to extend with [`insert`](Self::insert).
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(mut self, id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(id.into(), path.into());
        self
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn path_for(&self, id: &str) -> Option<&Path> {
        self.entries.get(id).map(PathBuf::as_path)
    }
}

/// Reads one fixture from the catalog.
#[derive(Debug, Clone)]
pub struct FixtureConfigSource {
    id: String,
    config_path: PathBuf,
}

impl FixtureConfigSource {
    /// Resolve `id` against the catalog.
    ///
    /// Unknown ids fail with `UnknownTestCase`; a registered id whose file
    /// is gone fails with `ConfigFileMissing`. Never falls back to the live
    /// configuration.
    pub fn open(catalog: &FixtureCatalog, id: &str) -> SchemafitResult<Self> {
        let config_path = catalog
            .path_for(id)
            .ok_or_else(|| ApplicationError::UnknownTestCase { id: id.to_string() })?
            .to_path_buf();

        if !config_path.exists() {
            return Err(ApplicationError::ConfigFileMissing { path: config_path }.into());
        }

        debug!(id, path = %config_path.display(), "Opened fixture configuration");
        Ok(Self {
            id: id.to_string(),
            config_path,
        })
    }
}

impl ConfigSource for FixtureConfigSource {
    fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn load_context(&self) -> SchemafitResult<GeneratorContext> {
        let text = std::fs::read_to_string(&self.config_path).map_err(|e| {
            ApplicationError::ConfigLoad {
                path: self.config_path.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(ProjectDocument::parse(&text, &self.config_path)?.into_context())
    }

    fn describe(&self) -> String {
        format!("fixture '{}'", self.id)
    }
}
