pub mod context;
pub mod hook_record;
pub mod patch;

pub use crate::domain::DomainError;
pub use context::{GeneratorContext, GeneratorContextBuilder};
pub use hook_record::ModuleHookRecord;
pub use patch::{Necessity, PatchPattern, PatchPlan, PatchRule, TargetFile};
