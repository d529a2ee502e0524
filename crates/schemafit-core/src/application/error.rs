//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Caller handed the resolver something that is not a string.
    #[error("Test case identifier must be a string, got {actual}")]
    TypeMismatch { actual: String },

    /// A non-empty test case identifier that no fixture is registered for.
    #[error("Unknown test case '{id}'")]
    UnknownTestCase { id: String },

    /// The resolved configuration file does not exist on disk.
    #[error("Configuration file not found: {path}")]
    ConfigFileMissing { path: PathBuf },

    /// The configuration file exists but could not be parsed.
    #[error("Failed to load configuration from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    /// An expected patch target is absent.
    #[error("Patch target missing: {path}")]
    MissingTargetFile { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The host registry rejected or failed a hook registration.
    #[error("Failed to register hook '{module}': {reason}")]
    RegistrationFailure { module: String, reason: String },

    /// The package-manager install process failed or could not spawn.
    #[error("'{manager} install' failed: {reason}")]
    InstallFailed { manager: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TypeMismatch { actual } => vec![
                format!("Received: {}", actual),
                "Pass a test case identifier as a string, or an empty string for the live configuration".into(),
            ],
            Self::UnknownTestCase { id } => vec![
                format!("No fixture is registered under '{}'", id),
                "Try: schemafit context --test-case <id> with a registered fixture".into(),
                "Known fixtures live under fixtures/<id>/.yo-rc.json".into(),
            ],
            Self::ConfigFileMissing { path } => vec![
                format!("Expected a configuration file at: {}", path.display()),
                "Run this tool from the root of a generated project".into(),
                "Or generate the project first so .yo-rc.json exists".into(),
            ],
            Self::ConfigLoad { path, .. } => vec![
                format!("Could not parse: {}", path.display()),
                "Check that the file is valid JSON".into(),
                "Regenerating the project will rewrite a well-formed configuration".into(),
            ],
            Self::MissingTargetFile { path } => vec![
                format!("Expected to patch: {}", path.display()),
                "Run the host generator first so the target files exist".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::RegistrationFailure { .. } => vec![
                "The hook registry could not be updated".into(),
                "Patching still applied; re-run registration with: schemafit hooks".into(),
            ],
            Self::InstallFailed { manager, .. } => vec![
                format!("To install your dependencies manually, run: {} install", manager),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TypeMismatch { .. } => ErrorCategory::Validation,
            Self::UnknownTestCase { .. }
            | Self::ConfigFileMissing { .. }
            | Self::MissingTargetFile { .. } => ErrorCategory::NotFound,
            Self::ConfigLoad { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. }
            | Self::RegistrationFailure { .. }
            | Self::InstallFailed { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the run continues past this error with a warning.
    ///
    /// Resolution and config-load failures stop the run; everything the
    /// write/install phases hit is contained and reported.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::TypeMismatch { .. }
            | Self::UnknownTestCase { .. }
            | Self::ConfigFileMissing { .. }
            | Self::ConfigLoad { .. } => false,
            Self::MissingTargetFile { .. }
            | Self::FilesystemError { .. }
            | Self::RegistrationFailure { .. }
            | Self::InstallFailed { .. } => true,
        }
    }
}
