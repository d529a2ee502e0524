//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `schemafit-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations against the project tree
//!   - `ConfigSource`: Resolution and loading of the generation configuration
//!   - `RuleCatalog`: Per-build-tool patch plans
//!   - `HookRegistry`: The host framework's module-hook registration API
//!   - `PackageInstaller`: The client package-manager install step
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ConfigSource, Filesystem, HookRegistry, PackageInstaller, RuleCatalog};
