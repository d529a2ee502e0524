use crate::domain::{
    entities::{ModuleHookRecord, PatchPlan},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_plan(plan: &PatchPlan) -> Result<(), DomainError> {
        plan.validate()
    }

    pub fn validate_hook_record(record: &ModuleHookRecord) -> Result<(), DomainError> {
        record.validate()
    }
}
