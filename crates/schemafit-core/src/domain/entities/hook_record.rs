//! The `ModuleHookRecord` entity: one registration with the host framework.
//!
//! A record names this module, the generator it hooks (app or entity), when
//! the hook fires, which of our sub-generators the host should call back
//! into, and a human-readable description. Ownership transfers to the host
//! registry on successful registration; the record itself carries no state
//! about whether registration happened.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{HookTiming, HookedGenerator},
};

/// A module-hook registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleHookRecord {
    module_name: String,
    hooked_generator: HookedGenerator,
    timing: HookTiming,
    sub_generator: String,
    description: String,
}

impl ModuleHookRecord {
    pub fn new(
        module_name: impl Into<String>,
        hooked_generator: HookedGenerator,
        timing: HookTiming,
        sub_generator: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            hooked_generator,
            timing,
            sub_generator: sub_generator.into(),
            description: description.into(),
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn hooked_generator(&self) -> HookedGenerator {
        self.hooked_generator
    }

    pub fn timing(&self) -> HookTiming {
        self.timing
    }

    pub fn sub_generator(&self) -> &str {
        &self.sub_generator
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The callback spelling the host registry stores:
    /// `<module>:<sub-generator>`.
    pub fn generator_callback(&self) -> String {
        format!("{}:{}", self.module_name, self.sub_generator)
    }

    /// Registry key: one record per (module, hooked generator) pair. A
    /// re-registration with the same key updates in place rather than
    /// appending a duplicate.
    pub fn registry_key(&self) -> (&str, HookedGenerator) {
        (&self.module_name, self.hooked_generator)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.module_name.trim().is_empty() {
            return Err(DomainError::InvalidHookRecord(
                "module name is empty".into(),
            ));
        }
        if self.sub_generator.trim().is_empty() {
            return Err(DomainError::InvalidHookRecord(
                "sub-generator name is empty".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ModuleHookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}-{} -> {})",
            self.module_name,
            self.timing,
            self.hooked_generator,
            self.generator_callback()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_joins_module_and_sub_generator() {
        let record = ModuleHookRecord::new(
            "schemafit",
            HookedGenerator::Entity,
            HookTiming::Post,
            "entity",
            "adapts entities to an existing database",
        );
        assert_eq!(record.generator_callback(), "schemafit:entity");
        assert_eq!(record.registry_key(), ("schemafit", HookedGenerator::Entity));
    }

    #[test]
    fn validation_rejects_blank_names() {
        let record = ModuleHookRecord::new(
            "  ",
            HookedGenerator::App,
            HookTiming::Post,
            "app",
            "desc",
        );
        assert!(record.validate().is_err());

        let record =
            ModuleHookRecord::new("schemafit", HookedGenerator::App, HookTiming::Post, "", "d");
        assert!(record.validate().is_err());
    }
}
