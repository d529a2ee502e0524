//! Configuration source backed by the project's own `.yo-rc.json`.

use std::path::{Path, PathBuf};

use tracing::debug;

use schemafit_core::{
    application::{ApplicationError, ports::ConfigSource},
    domain::GeneratorContext,
    error::SchemafitResult,
};

use super::document::{CONFIG_FILE_NAME, ProjectDocument};

/// Reads the live project configuration.
///
/// Construction verifies the file exists, so `config_path()` never dangles.
#[derive(Debug, Clone)]
pub struct LiveConfigSource {
    config_path: PathBuf,
}

impl LiveConfigSource {
    /// Open the configuration of the project rooted at `project_dir`.
    pub fn open(project_dir: &Path) -> SchemafitResult<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(ApplicationError::ConfigFileMissing { path: config_path }.into());
        }
        debug!(path = %config_path.display(), "Opened live configuration");
        Ok(Self { config_path })
    }
}

impl ConfigSource for LiveConfigSource {
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
        "live configuration".into()
    }
}
