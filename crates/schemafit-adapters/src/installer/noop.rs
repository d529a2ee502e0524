//! Installer that does nothing.

use std::path::Path;

use tracing::debug;

use schemafit_core::{application::ports::PackageInstaller, error::SchemafitResult};

/// Succeeds without spawning anything. Used by runs that never install
/// (patch-only subcommands) and by tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInstaller;

impl NoopInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl PackageInstaller for NoopInstaller {
    fn install(&self, manager: &str, project_dir: &Path) -> SchemafitResult<()> {
        debug!(manager, dir = %project_dir.display(), "Install skipped (noop installer)");
        Ok(())
    }
}
