//! The `GeneratorContext` aggregate root and its builder.
//!
//! A `GeneratorContext` is the fully-resolved, read-only description of the
//! scaffolded project being adapted: what it is called, which package its
//! server code lives in, which build tool it uses, and where its generated
//! source roots are. It is constructed exactly once per run, from a single
//! configuration source, and then only read.
//!
//! # Unset fields stay unset
//!
//! Configuration documents in the wild are frequently partial. A field the
//! document does not carry is `None` here, never silently defaulted, so that
//! consumers can tell "not configured" apart from any real value. The one
//! exception is the pair of layout roots (`resource_dir`, `webapp_dir`),
//! which the host scaffolder fixes for every project it generates.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::BuildTool};

/// Layout root for generated resources, fixed by the host scaffolder.
pub const RESOURCE_DIR: &str = "src/main/resources";
/// Layout root for generated web assets, fixed by the host scaffolder.
pub const WEBAPP_DIR: &str = "src/main/webapp";
/// Root under which server sources live; the package path is appended.
pub const SERVER_SRC_ROOT: &str = "src/main/java";

// ── Aggregate root ────────────────────────────────────────────────────────────

/// The resolved generation variables of a scaffolded project.
///
/// Single-writer (the configuration source that resolves it), multi-reader
/// (patcher, registrar, CLI display). There are no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorContext {
    base_name: Option<String>,
    package_name: Option<String>,
    application_name: Option<String>,
    client_framework: Option<String>,
    client_package_manager: Option<String>,
    build_tool: Option<String>,
    server_dir: Option<PathBuf>,
    resource_dir: PathBuf,
    webapp_dir: PathBuf,
}

impl GeneratorContext {
    /// Start building a new `GeneratorContext`.
    pub fn builder() -> GeneratorContextBuilder {
        GeneratorContextBuilder::default()
    }

    pub fn base_name(&self) -> Option<&str> {
        self.base_name.as_deref()
    }
    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }
    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }
    pub fn client_framework(&self) -> Option<&str> {
        self.client_framework.as_deref()
    }
    pub fn client_package_manager(&self) -> Option<&str> {
        self.client_package_manager.as_deref()
    }

    /// The raw build-tool identifier as the configuration spelled it.
    pub fn build_tool_raw(&self) -> Option<&str> {
        self.build_tool.as_deref()
    }

    /// Directory holding the generated server sources, derived from the
    /// package name (`src/main/java/<package-as-path>`). `None` when the
    /// configuration did not name a package.
    pub fn server_dir(&self) -> Option<&Path> {
        self.server_dir.as_deref()
    }

    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    pub fn webapp_dir(&self) -> &Path {
        &self.webapp_dir
    }

    /// Parse the build-tool field into the closed [`BuildTool`] set.
    ///
    /// `MissingField` when the configuration never set one,
    /// `UnsupportedBuildTool` when it names something we cannot patch.
    pub fn build_tool(&self) -> Result<BuildTool, DomainError> {
        match self.build_tool.as_deref() {
            None => Err(DomainError::MissingField {
                field: "buildTool",
            }),
            Some(raw) => BuildTool::from_str(raw),
        }
    }

    /// Names of recognized fields the configuration left unset.
    ///
    /// Empty means the context is complete. Consumers that need a specific
    /// field still check it directly; this exists for diagnostics.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.base_name.is_none() {
            missing.push("baseName");
        }
        if self.package_name.is_none() {
            missing.push("packageName");
        }
        if self.application_name.is_none() {
            missing.push("applicationName");
        }
        if self.client_framework.is_none() {
            missing.push("clientFramework");
        }
        if self.client_package_manager.is_none() {
            missing.push("clientPackageManager");
        }
        if self.build_tool.is_none() {
            missing.push("buildTool");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl fmt::Display for GeneratorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.base_name.as_deref().unwrap_or("<unnamed>"),
            self.build_tool.as_deref().unwrap_or("<no build tool>"),
            self.package_name.as_deref().unwrap_or("<no package>"),
        )
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`GeneratorContext`].
///
/// Every field is optional, so `build()` always succeeds; it derives the
/// server source directory from the package name when one was given.
#[derive(Debug, Default)]
pub struct GeneratorContextBuilder {
    base_name: Option<String>,
    package_name: Option<String>,
    application_name: Option<String>,
    client_framework: Option<String>,
    client_package_manager: Option<String>,
    build_tool: Option<String>,
}

impl GeneratorContextBuilder {
    pub fn base_name(mut self, value: impl Into<String>) -> Self {
        self.base_name = Some(value.into());
        self
    }

    pub fn package_name(mut self, value: impl Into<String>) -> Self {
        self.package_name = Some(value.into());
        self
    }

    pub fn application_name(mut self, value: impl Into<String>) -> Self {
        self.application_name = Some(value.into());
        self
    }

    pub fn client_framework(mut self, value: impl Into<String>) -> Self {
        self.client_framework = Some(value.into());
        self
    }

    pub fn client_package_manager(mut self, value: impl Into<String>) -> Self {
        self.client_package_manager = Some(value.into());
        self
    }

    pub fn build_tool(mut self, value: impl Into<String>) -> Self {
        self.build_tool = Some(value.into());
        self
    }

    pub fn build(self) -> GeneratorContext {
        let server_dir = self
            .package_name
            .as_deref()
            .map(|pkg| Path::new(SERVER_SRC_ROOT).join(pkg.replace('.', "/")));

        GeneratorContext {
            base_name: self.base_name,
            package_name: self.package_name,
            application_name: self.application_name,
            client_framework: self.client_framework,
            client_package_manager: self.client_package_manager,
            build_tool: self.build_tool,
            server_dir,
            resource_dir: PathBuf::from(RESOURCE_DIR),
            webapp_dir: PathBuf::from(WEBAPP_DIR),
        }
    }
}
