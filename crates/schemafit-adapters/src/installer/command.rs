//! Installer that spawns the real package manager.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use schemafit_core::{
    application::{ApplicationError, ports::PackageInstaller},
    error::SchemafitResult,
};

/// Runs `<manager> install` as a child process in the project directory,
/// blocking until it exits. Stdout and stderr are inherited so the manager's
/// own progress output reaches the user directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInstaller;

impl CommandInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl PackageInstaller for CommandInstaller {
    fn install(&self, manager: &str, project_dir: &Path) -> SchemafitResult<()> {
        debug!(manager, dir = %project_dir.display(), "Spawning package manager");

        let status = Command::new(manager)
            .arg("install")
            .current_dir(project_dir)
            .status()
            .map_err(|e| ApplicationError::InstallFailed {
                manager: manager.to_string(),
                reason: format!("could not spawn process: {e}"),
            })?;

        if !status.success() {
            return Err(ApplicationError::InstallFailed {
                manager: manager.to_string(),
                reason: match status.code() {
                    Some(code) => format!("exited with status {code}"),
                    None => "terminated by signal".to_string(),
                },
            }
            .into());
        }

        info!(manager, "Dependencies installed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_manager_binary_is_an_install_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = CommandInstaller::new()
            .install("schemafit-no-such-manager", dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("install"));
    }

    #[test]
    fn successful_process_reports_ok() {
        // `true` ignores its arguments and exits 0 on every POSIX system.
        let dir = tempfile::tempdir().unwrap();
        CommandInstaller::new().install("true", dir.path()).unwrap();
    }

    #[test]
    fn nonzero_exit_is_an_install_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = CommandInstaller::new()
            .install("false", dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("'false install' failed"));
    }
}
