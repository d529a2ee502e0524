//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `schemafit-adapters` crate provides implementations.

use crate::domain::{BuildTool, GeneratorContext, ModuleHookRecord, PatchPlan};
use crate::error::SchemafitResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `schemafit_adapters::filesystem::LocalFilesystem` (production)
/// - `schemafit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are resolved by the caller; the port does no path derivation
/// - Reads and writes are whole-file and synchronous
pub trait Filesystem: Send + Sync {
    /// Read a file's entire content as UTF-8.
    fn read_to_string(&self, path: &Path) -> SchemafitResult<String>;

    /// Write content to a file, creating it if needed.
    fn write_file(&self, path: &Path, content: &str) -> SchemafitResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SchemafitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for resolving and loading the generation configuration.
///
/// Exactly one source backs a run: the live project configuration or a
/// named fixture. The two are never merged; selecting which implementation
/// to construct is the caller's job, so no test-mode conditional ever
/// reaches the services.
///
/// Implemented by:
/// - `schemafit_adapters::config_source::LiveConfigSource` (production)
/// - `schemafit_adapters::config_source::FixtureConfigSource` (test runs)
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    /// The path of the document this source reads.
    ///
    /// Must already be verified to exist when the source was constructed;
    /// a dangling path is a construction-time NotFound, never a surprise
    /// at load time.
    fn config_path(&self) -> &Path;

    /// Parse the document into a context. Unrecognized keys are ignored;
    /// recognized-but-absent keys stay unset on the context.
    fn load_context(&self) -> SchemafitResult<GeneratorContext>;

    /// Short human-readable description of the source for logs
    /// ("live configuration", "fixture 'maven-app'").
    fn describe(&self) -> String;
}

/// Port for per-build-tool patch plans.
///
/// The concrete search/replacement patterns are data, not code. The
/// compiled-in defaults live in
/// `schemafit_adapters::rules::BuiltinRuleCatalog`; callers may substitute
/// any other source of plans.
pub trait RuleCatalog: Send + Sync {
    /// The plan for one build tool, with target paths already resolved
    /// against the context's directory fields.
    fn plan_for(&self, tool: BuildTool, context: &GeneratorContext) -> SchemafitResult<PatchPlan>;
}

/// Port for the host framework's module-hook registration API.
///
/// Implemented by:
/// - `schemafit_adapters::hook_registry::JsonHookRegistry` (production)
/// - `schemafit_adapters::hook_registry::MemoryHookRegistry` (testing)
pub trait HookRegistry: Send + Sync {
    /// Register one hook record. Re-registering an existing
    /// (module, generator) key updates the stored record in place.
    fn register(&self, record: &ModuleHookRecord) -> SchemafitResult<()>;
}

/// Port for the dependency-installation step.
///
/// Implemented by:
/// - `schemafit_adapters::installer::CommandInstaller` (spawns the real process)
/// - `schemafit_adapters::installer::NoopInstaller` (tests, --skip-install)
pub trait PackageInstaller: Send + Sync {
    /// Run `<manager> install` in `project_dir`, blocking until it exits.
    fn install(&self, manager: &str, project_dir: &Path) -> SchemafitResult<()>;
}
