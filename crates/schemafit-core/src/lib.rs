//! Schemafit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Schemafit
//! database-adaptation tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          schemafit-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (PatchService, RegistrarService,      │
//! │    GenerationPipeline)                   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)           │
//! │ (Driven: ConfigSource, Filesystem,      │
//! │  HookRegistry, RuleCatalog, Installer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    schemafit-adapters (Infrastructure)    │
//! │ (LiveConfigSource, LocalFilesystem,     │
//! │  JsonHookRegistry, BuiltinRuleCatalog)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)         │
//! │  (GeneratorContext, BuildTool,          │
//! │   PatchPlan, ModuleHookRecord)          │
//! │         No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use schemafit_core::{
//!     application::PatchService,
//!     domain::GeneratorContext,
//! };
//!
//! // 1. Resolve the generated project's context
//! let context: GeneratorContext = config_source.load_context()?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = PatchService::new(filesystem, catalog);
//! let report = service.apply_naming_strategy_patches(&project_dir, &context)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationPipeline, PatchService, RegistrarService,
        ports::{ConfigSource, Filesystem, HookRegistry, PackageInstaller, RuleCatalog},
    };
    pub use crate::domain::{
        BuildTool, GeneratorContext, GeneratorContextBuilder, HookTiming, HookedGenerator,
        ModuleHookRecord, Necessity, PatchPattern, PatchPlan, PatchRule, TargetFile,
    };
    pub use crate::error::{SchemafitError, SchemafitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
