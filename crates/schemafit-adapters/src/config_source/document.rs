//! The persisted project-configuration document.
//!
//! Generated projects keep their generation answers in a `.yo-rc.json` at
//! the project root, namespaced under the host generator's key. Only the
//! keys this tool consumes are modeled; everything else in the document is
//! ignored on read and never written back.

use std::path::Path;

use serde::Deserialize;

use schemafit_core::{
    application::ApplicationError,
    domain::GeneratorContext,
    error::SchemafitResult,
};

/// Namespace key the host generator stores its section under.
pub const GENERATOR_NAMESPACE: &str = "generator-jhipster";

/// Well-known configuration filename at the project root.
pub const CONFIG_FILE_NAME: &str = ".yo-rc.json";

/// The whole document; all we care about is our namespace.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectDocument {
    #[serde(rename = "generator-jhipster", default)]
    generator: GeneratorSection,
}

/// The recognized keys inside the namespace. Absent keys deserialize to
/// `None` and stay unset on the context.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct GeneratorSection {
    base_name: Option<String>,
    package_name: Option<String>,
    client_framework: Option<String>,
    client_package_manager: Option<String>,
    build_tool: Option<String>,
}

impl ProjectDocument {
    /// Parse document text. A malformed document is a fatal
    /// [`ApplicationError::ConfigLoad`]; `path` is only used for the error.
    pub fn parse(text: &str, path: &Path) -> SchemafitResult<Self> {
        serde_json::from_str(text).map_err(|e| {
            ApplicationError::ConfigLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Build the run context from the recognized keys.
    ///
    /// The application display name is not persisted by the host; it derives
    /// it from the base name, and so do we.
    pub fn into_context(self) -> GeneratorContext {
        let section = self.generator;
        let mut builder = GeneratorContext::builder();

        if let Some(base_name) = &section.base_name {
            builder = builder
                .application_name(derive_application_name(base_name))
                .base_name(base_name.clone());
        }
        if let Some(package_name) = section.package_name {
            builder = builder.package_name(package_name);
        }
        if let Some(client_framework) = section.client_framework {
            builder = builder.client_framework(client_framework);
        }
        if let Some(client_package_manager) = section.client_package_manager {
            builder = builder.client_package_manager(client_package_manager);
        }
        if let Some(build_tool) = section.build_tool {
            builder = builder.build_tool(build_tool);
        }

        builder.build()
    }
}

/// Display name the host derives for the client application: camelCase of
/// the base name with an `App` suffix unless one is already there.
fn derive_application_name(base_name: &str) -> String {
    let camel = camel_case(base_name);
    if camel.ends_with("App") {
        camel
    } else {
        format!("{camel}App")
    }
}

fn camel_case(input: &str) -> String {
    let words: Vec<&str> = input
        .split(|c: char| c == '-' || c == '_' || c == ' ' || c == '.')
        .filter(|w| !w.is_empty())
        .collect();

    let mut out = String::with_capacity(input.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            // Keep the first word's casing so camelCase input survives.
            out.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "generator-jhipster": {
            "jhipsterVersion": "3.4.0",
            "baseName": "sample",
            "packageName": "com.acme.sample",
            "buildTool": "maven",
            "clientFramework": "angular1",
            "clientPackageManager": "yarn",
            "enableTranslation": true
        }
    }"#;

    #[test]
    fn recognized_keys_populate_the_context() {
        let doc = ProjectDocument::parse(SAMPLE, Path::new(".yo-rc.json")).unwrap();
        let ctx = doc.into_context();

        assert_eq!(ctx.base_name(), Some("sample"));
        assert_eq!(ctx.application_name(), Some("sampleApp"));
        assert_eq!(ctx.package_name(), Some("com.acme.sample"));
        assert_eq!(ctx.client_framework(), Some("angular1"));
        assert_eq!(ctx.client_package_manager(), Some("yarn"));
        assert_eq!(ctx.build_tool_raw(), Some("maven"));
        assert!(ctx.is_complete());
    }

    #[test]
    fn absent_keys_stay_unset() {
        let doc = ProjectDocument::parse(
            r#"{"generator-jhipster": {"baseName": "bare"}}"#,
            Path::new(".yo-rc.json"),
        )
        .unwrap();
        let ctx = doc.into_context();

        assert_eq!(ctx.base_name(), Some("bare"));
        assert_eq!(ctx.build_tool_raw(), None);
        assert!(ctx.missing_fields().contains(&"buildTool"));
    }

    #[test]
    fn missing_namespace_yields_empty_context() {
        let doc = ProjectDocument::parse(r#"{"other-tool": {}}"#, Path::new(".yo-rc.json")).unwrap();
        let ctx = doc.into_context();
        assert_eq!(ctx.missing_fields().len(), 6);
    }

    #[test]
    fn malformed_document_is_a_config_load_error() {
        let err = ProjectDocument::parse("{ not json", Path::new("broken.json")).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn application_name_derivation() {
        assert_eq!(derive_application_name("shop"), "shopApp");
        assert_eq!(derive_application_name("myShopApp"), "myShopApp");
        assert_eq!(derive_application_name("my-cool-shop"), "myCoolShopApp");
    }
}
