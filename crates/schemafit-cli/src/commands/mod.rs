//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core service calls and render
//! the results; no business logic lives here.

use std::path::{Path, PathBuf};

use serde_json::json;

use schemafit_adapters::{FixtureCatalog, select_config_source};
use schemafit_core::application::ports::ConfigSource;

use crate::error::{CliError, CliResult};

pub mod apply;
pub mod completions;
pub mod config;
pub mod context;
pub mod entity;
pub mod hooks;

/// Validate that the directory handed to `--project-dir` exists.
pub(crate) fn existing_project_dir(dir: &Path) -> CliResult<PathBuf> {
    if !dir.is_dir() {
        return Err(CliError::ProjectDirNotFound {
            path: dir.to_path_buf(),
        });
    }
    Ok(dir.to_path_buf())
}

/// Select the configuration source for a run: the live document, or the
/// named fixture when `--test-case` was given.
///
/// An absent flag becomes the empty string, which selects the live
/// configuration; the CLI never hands the resolver a non-string value.
pub(crate) fn resolve_source(
    project_dir: &Path,
    test_case: Option<&str>,
    fixture_root: &Path,
) -> CliResult<Box<dyn ConfigSource>> {
    let catalog = FixtureCatalog::builtin(fixture_root);
    let test_case = json!(test_case.unwrap_or_default());
    select_config_source(&test_case, project_dir, &catalog).map_err(CliError::Core)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_project_dir_is_not_found() {
        let err = existing_project_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, CliError::ProjectDirNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn existing_project_dir_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = existing_project_dir(dir.path()).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn absent_test_case_selects_the_live_configuration() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".yo-rc.json"),
            r#"{"generator-jhipster": {"baseName": "app"}}"#,
        )
        .unwrap();

        let source = resolve_source(dir.path(), None, dir.path()).unwrap();
        assert_eq!(source.describe(), "live configuration");
    }

    #[test]
    fn unknown_test_case_is_a_core_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_source(dir.path(), Some("ghost"), dir.path()).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 3);
    }
}
