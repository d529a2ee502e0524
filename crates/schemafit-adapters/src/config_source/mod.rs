//! Configuration sources: live project document or named fixture.
//!
//! Exactly one source backs a run. [`select_config_source`] is the single
//! switch point: callers hand it the raw test-case value and get back a
//! boxed source, so no test-mode conditional survives past this module.

mod document;
mod fixture;
mod live;

use std::path::Path;

use schemafit_core::{
    application::{ApplicationError, ports::ConfigSource},
    error::SchemafitResult,
};

pub use document::{CONFIG_FILE_NAME, GENERATOR_NAMESPACE, ProjectDocument};
pub use fixture::{FixtureCatalog, FixtureConfigSource};
pub use live::LiveConfigSource;

/// Resolve the configuration source for a run.
///
/// - a JSON string `""` selects the live configuration under `project_dir`
/// - any other JSON string must name a catalog fixture
/// - any non-string JSON value is a `TypeMismatch`, rejected before any
///   filesystem access
///
/// Every returned source has an existing `config_path()`; resolution
/// failures (`TypeMismatch`, `UnknownTestCase`, `ConfigFileMissing`) are
/// errors here, never silent fallbacks.
pub fn select_config_source(
    test_case: &serde_json::Value,
    project_dir: &Path,
    catalog: &FixtureCatalog,
) -> SchemafitResult<Box<dyn ConfigSource>> {
    let id = test_case
        .as_str()
        .ok_or_else(|| ApplicationError::TypeMismatch {
            actual: describe_json_type(test_case),
        })?;

    if id.is_empty() {
        Ok(Box::new(LiveConfigSource::open(project_dir)?))
    } else {
        Ok(Box::new(FixtureConfigSource::open(catalog, id)?))
    }
}

fn describe_json_type(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".into(),
        serde_json::Value::Bool(b) => format!("boolean {b}"),
        serde_json::Value::Number(n) => format!("number {n}"),
        serde_json::Value::String(_) => "string".into(),
        serde_json::Value::Array(_) => "an array".into(),
        serde_json::Value::Object(_) => "an object".into(),
    }
}
