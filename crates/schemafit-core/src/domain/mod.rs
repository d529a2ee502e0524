// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Schemafit.
//!
//! This module contains pure business logic with ZERO I/O dependencies.
//! Reading configuration documents, touching target files, and talking to
//! the host registry are all handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    context::{GeneratorContext, GeneratorContextBuilder, RESOURCE_DIR, SERVER_SRC_ROOT, WEBAPP_DIR},
    hook_record::ModuleHookRecord,
    patch::{Necessity, PatchPattern, PatchPlan, PatchRule, TargetFile},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{BuildTool, HookTiming, HookedGenerator};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn build_tool_parses_correctly() {
        assert_eq!(BuildTool::from_str("maven").unwrap(), BuildTool::Maven);
        assert_eq!(BuildTool::from_str("MVN").unwrap(), BuildTool::Maven);
        assert_eq!(BuildTool::from_str("Gradle").unwrap(), BuildTool::Gradle);
        assert!(BuildTool::from_str("ant").is_err());
    }

    #[test]
    fn build_tool_rejection_names_the_tool() {
        let err = BuildTool::from_str("bazel").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedBuildTool {
                tool: "bazel".into()
            }
        );
        assert!(err.to_string().contains("bazel"));
    }

    #[test]
    fn hook_point_wire_names() {
        assert_eq!(HookedGenerator::App.as_str(), "app");
        assert_eq!(HookedGenerator::Entity.as_str(), "entity");
        assert_eq!(HookTiming::Post.as_str(), "post");
        assert_eq!(
            HookedGenerator::from_str("application").unwrap(),
            HookedGenerator::App
        );
        assert!(HookTiming::from_str("during").is_err());
    }

    // ========================================================================
    // Context Tests
    // ========================================================================

    #[test]
    fn context_display_handles_missing_fields() {
        let ctx = GeneratorContext::builder().build();
        let shown = ctx.to_string();
        assert!(shown.contains("<unnamed>"));
        assert!(shown.contains("<no build tool>"));
    }

    #[test]
    fn context_is_resolved_from_one_source_shape() {
        // All knowledge flows in through the builder exactly once; the type
        // has no setters to merge a second source into.
        let ctx = GeneratorContext::builder()
            .base_name("shop")
            .package_name("org.example.shop")
            .build_tool("gradle")
            .build();
        assert_eq!(ctx.base_name(), Some("shop"));
        assert_eq!(ctx.build_tool().unwrap(), BuildTool::Gradle);
        assert_eq!(
            ctx.missing_fields(),
            vec!["applicationName", "clientFramework", "clientPackageManager"]
        );
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_delegates_to_entities() {
        let plan = PatchPlan::new(BuildTool::Maven)
            .with_entry(TargetFile::required(
                "pom.xml",
                vec![PatchRule::literal("Old", "New")],
            ));
        assert!(DomainValidator::validate_plan(&plan).is_ok());

        let record = ModuleHookRecord::new(
            "schemafit",
            HookedGenerator::App,
            HookTiming::Post,
            "app",
            "adapts generated apps to an existing database",
        );
        assert!(DomainValidator::validate_hook_record(&record).is_ok());
    }
}
