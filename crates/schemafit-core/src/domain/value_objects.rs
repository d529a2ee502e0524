//! Domain value objects: BuildTool, HookedGenerator, HookTiming.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO patching logic. Which files a build tool owns and what gets
//! substituted in them is catalog data supplied through the `RuleCatalog`
//! port. This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a patch plan for it in the rule catalog adapter
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── BuildTool ─────────────────────────────────────────────────────────────────

/// A supported JVM build tool.
///
/// The set is closed: scaffolded projects declare one of these in their
/// configuration, and the patch plans only exist for these. Anything else
/// parses to `DomainError::UnsupportedBuildTool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl BuildTool {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maven => "maven",
            Self::Gradle => "gradle",
        }
    }

    /// All supported tools, for error messages and help text.
    pub const fn all() -> [BuildTool; 2] {
        [Self::Maven, Self::Gradle]
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTool {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "maven" | "mvn" => Ok(Self::Maven),
            "gradle" => Ok(Self::Gradle),
            other => Err(DomainError::UnsupportedBuildTool {
                tool: other.to_string(),
            }),
        }
    }
}

// ── HookedGenerator ───────────────────────────────────────────────────────────

/// Which host-framework generator a hook attaches to.
///
/// Wire names (`app`, `entity`) match what the host registry persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookedGenerator {
    App,
    Entity,
}

impl HookedGenerator {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Entity => "entity",
        }
    }
}

impl fmt::Display for HookedGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookedGenerator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "app" | "application" => Ok(Self::App),
            "entity" => Ok(Self::Entity),
            other => Err(DomainError::InvalidHookPoint {
                value: other.to_string(),
            }),
        }
    }
}

// ── HookTiming ────────────────────────────────────────────────────────────────

/// When a hook fires relative to the generator it attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookTiming {
    Pre,
    Post,
}

impl HookTiming {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for HookTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookTiming {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" => Ok(Self::Pre),
            "post" => Ok(Self::Post),
            other => Err(DomainError::InvalidHookPoint {
                value: other.to_string(),
            }),
        }
    }
}
