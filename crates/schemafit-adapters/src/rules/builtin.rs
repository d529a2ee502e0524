//! Built-in patch plans.
//!
//! This module is the compiled-in [`RuleCatalog`]: the default substitution
//! data that adapts a freshly scaffolded project's ORM naming strategies.
//! Scaffolded projects declare *deriving* naming strategies, which rename
//! tables and columns behind the schema's back; these plans swap them for
//! the non-deriving standard implementations so an existing database keeps
//! its names.
//!
//! # What gets replaced
//!
//! Three class references, wherever they appear in a target file:
//!
//! | scaffolder default                      | replacement                            |
//! |-----------------------------------------|----------------------------------------|
//! | `…hibernate.SpringPhysicalNamingStrategy` | `…naming.PhysicalNamingStrategyStandardImpl` |
//! | `…hibernate.SpringImplicitNamingStrategy` | `…naming.ImplicitNamingStrategyJpaCompliantImpl` |
//! | `…hibernate.SpringNamingStrategy` (legacy) | `…naming.PhysicalNamingStrategyStandardImpl` |
//!
//! All three are literal full-class-name swaps. Surrounding content (XML
//! attributes, YAML keys, Gradle property syntax) is untouched, which is what
//! keeps one rule set valid across every target file format.
//!
//! # Which files get patched
//!
//! The build tool picks the required set: `pom.xml` for Maven, the dev and
//! prod profile scripts for Gradle. Both tools share two optional targets,
//! the application config under the resources directory and its test
//! counterpart; projects scaffolded without one simply skip it.

use std::path::PathBuf;

use schemafit_core::{
    application::ports::RuleCatalog,
    domain::{BuildTool, GeneratorContext, PatchPlan, PatchRule, TargetFile},
    error::SchemafitResult,
};

// ── Class names ───────────────────────────────────────────────────────────────

/// Deriving physical strategy the scaffolder writes.
const SPRING_PHYSICAL: &str =
    "org.springframework.boot.orm.jpa.hibernate.SpringPhysicalNamingStrategy";
/// Deriving implicit strategy the scaffolder writes.
const SPRING_IMPLICIT: &str =
    "org.springframework.boot.orm.jpa.hibernate.SpringImplicitNamingStrategy";
/// Pre-split deriving strategy older scaffolder releases wrote.
const SPRING_LEGACY: &str = "org.springframework.boot.orm.jpa.hibernate.SpringNamingStrategy";

/// Non-deriving physical strategy: entity names pass through unchanged.
const HIBERNATE_PHYSICAL: &str = "org.hibernate.boot.model.naming.PhysicalNamingStrategyStandardImpl";
/// Non-deriving implicit strategy.
const HIBERNATE_IMPLICIT: &str =
    "org.hibernate.boot.model.naming.ImplicitNamingStrategyJpaCompliantImpl";

// ── Target paths ──────────────────────────────────────────────────────────────

const MAVEN_BUILD_FILE: &str = "pom.xml";
const GRADLE_DEV_PROFILE: &str = "gradle/profile_dev.gradle";
const GRADLE_PROD_PROFILE: &str = "gradle/profile_prod.gradle";
const TEST_APPLICATION_CONFIG: &str = "src/test/resources/config/application.yml";

// ── Catalog ───────────────────────────────────────────────────────────────────

/// The compiled-in rule catalog.
///
/// Stateless; plans are built per call so each carries the context's resolved
/// resource directory. Substitute any other [`RuleCatalog`] implementation to
/// patch different files or strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRuleCatalog;

impl BuiltinRuleCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl RuleCatalog for BuiltinRuleCatalog {
    fn plan_for(&self, tool: BuildTool, context: &GeneratorContext) -> SchemafitResult<PatchPlan> {
        let mut plan = PatchPlan::new(tool);
        for path in required_targets(tool) {
            plan = plan.with_entry(TargetFile::required(path, naming_strategy_rules()));
        }
        for path in optional_targets(context) {
            plan = plan.with_entry(TargetFile::optional(path, naming_strategy_rules()));
        }
        Ok(plan)
    }
}

/// The shared substitution set, legacy rule last so the split successors are
/// rewritten before the shorter legacy name is considered.
fn naming_strategy_rules() -> Vec<PatchRule> {
    vec![
        PatchRule::literal(SPRING_PHYSICAL, HIBERNATE_PHYSICAL),
        PatchRule::literal(SPRING_IMPLICIT, HIBERNATE_IMPLICIT),
        PatchRule::literal(SPRING_LEGACY, HIBERNATE_PHYSICAL),
    ]
}

/// Files the build tool owns; all must exist for the plan to commit.
fn required_targets(tool: BuildTool) -> Vec<PathBuf> {
    match tool {
        BuildTool::Maven => vec![PathBuf::from(MAVEN_BUILD_FILE)],
        BuildTool::Gradle => vec![
            PathBuf::from(GRADLE_DEV_PROFILE),
            PathBuf::from(GRADLE_PROD_PROFILE),
        ],
    }
}

/// Application configs shared by both build tools; missing ones are skipped.
fn optional_targets(context: &GeneratorContext) -> Vec<PathBuf> {
    vec![
        context.resource_dir().join("config/application.yml"),
        PathBuf::from(TEST_APPLICATION_CONFIG),
    ]
}
