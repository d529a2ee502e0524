//! Infrastructure adapters for Schemafit.
//!
//! This crate implements the ports defined in
//! `schemafit-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod config_source;
pub mod filesystem;
pub mod hook_registry;
pub mod installer;
pub mod rules;

// Re-export commonly used adapters
pub use config_source::{FixtureCatalog, FixtureConfigSource, LiveConfigSource, select_config_source};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use hook_registry::{JsonHookRegistry, MemoryHookRegistry};
pub use installer::{CommandInstaller, NoopInstaller};
pub use rules::BuiltinRuleCatalog;
