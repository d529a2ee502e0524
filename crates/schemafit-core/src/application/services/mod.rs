//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "patch this project's naming strategies" or
//! "run a full adaptation pass".

pub mod patch_service;
pub mod pipeline;
pub mod registrar_service;

pub use patch_service::{FileOutcome, FileStatus, PatchReport, PatchService};
pub use pipeline::{GenerationPipeline, InstallStatus, Phase, PipelineOptions, RunReport};
pub use registrar_service::{
    MODULE_NAME, RegistrarService, RegistrationOutcome, RegistrationReport, RegistrationStatus,
};
