//! Application layer for Schemafit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PatchService, RegistrarService,
//!   GenerationPipeline)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerationPipeline, InstallStatus, PatchReport, PatchService, Phase, PipelineOptions,
    RegistrarService, RegistrationReport, RunReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigSource, Filesystem, HookRegistry, PackageInstaller, RuleCatalog};

pub use error::ApplicationError;
