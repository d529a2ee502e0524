//! Patch domain aggregate: the rules that rewrite generated files.
//!
//! This module defines the patch data model following **Domain-Driven Design**
//! and **Hexagonal Architecture** principles. Patch plans are the central
//! concept in Schemafit: they describe, per build tool, which files get
//! rewritten and how.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Patch Domain                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PatchPlan (Aggregate Root) - one per build tool            │
//! │  └── Vec<TargetFile>                                        │
//! │       ├── path (relative to the project root)               │
//! │       ├── Necessity (Required | Optional)                   │
//! │       └── Vec<PatchRule>                                    │
//! │            ├── PatchPattern (Literal | Regex)               │
//! │            └── replacement                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RuleCatalog (Driven Port)                                  │
//! │  └── plan_for(build_tool) -> PatchPlan                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Decisions
//!
//! ### 1. Why is the substitution engine here, not in an adapter?
//!
//! Applying rules to text is pure: `&str` in, `String` out, no I/O. Keeping
//! it in the domain lets the idempotence law be tested without a filesystem
//! and reused by every adapter identically.
//!
//! ### 2. Why validate idempotence instead of assuming it?
//!
//! The registered hooks re-run this subsystem on later generation passes, so
//! every rule WILL be applied to already-patched text. A rule whose
//! replacement re-matches its own pattern grows the file on every pass.
//! `PatchRule::validate` rejects such rules up front, which turns the
//! idempotence invariant into a constructible guarantee rather than a hope.
//!
//! ### 3. Why `Necessity` instead of two file lists?
//!
//! Required and optional targets travel together per build tool but fail
//! differently: a missing required file voids the whole invocation (nothing
//! is written), a missing optional file only skips itself. Keeping the flag
//! on the entry lets the patcher iterate one list with one policy switch.

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::BuildTool};

// ── PatchPattern ──────────────────────────────────────────────────────────────

/// What a rule searches for.
///
/// `Literal` is an exact substring; `Regex` is a regular expression compiled
/// on application. Most naming-strategy rewrites are literal class-name
/// swaps; the regex form exists for catalogs that need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "pattern")]
pub enum PatchPattern {
    Literal(String),
    Regex(String),
}

impl PatchPattern {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Regex(s) => s,
        }
    }
}

impl fmt::Display for PatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => write!(f, "literal:{s}"),
            Self::Regex(s) => write!(f, "regex:{s}"),
        }
    }
}

// ── PatchRule ─────────────────────────────────────────────────────────────────

/// A single substitution: replace every match of `pattern` with
/// `replacement`, preserving all surrounding content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchRule {
    pattern: PatchPattern,
    replacement: String,
}

impl PatchRule {
    pub fn literal(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: PatchPattern::Literal(pattern.into()),
            replacement: replacement.into(),
        }
    }

    pub fn regex(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: PatchPattern::Regex(pattern.into()),
            replacement: replacement.into(),
        }
    }

    pub fn pattern(&self) -> &PatchPattern {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Check that this rule is well-formed and idempotent.
    ///
    /// - the pattern must be non-empty (an empty literal matches everywhere)
    /// - a regex pattern must compile
    /// - the replacement must not itself match the pattern, otherwise a
    ///   second application would rewrite the rewrite
    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.pattern {
            PatchPattern::Literal(pat) => {
                if pat.is_empty() {
                    return Err(DomainError::InvalidPattern {
                        pattern: String::new(),
                        reason: "empty literal pattern".into(),
                    });
                }
                if self.replacement.contains(pat.as_str()) {
                    return Err(DomainError::InvalidPattern {
                        pattern: pat.clone(),
                        reason: "replacement contains the pattern; rule is not idempotent"
                            .into(),
                    });
                }
            }
            PatchPattern::Regex(pat) => {
                let re = Regex::new(pat).map_err(|e| DomainError::InvalidPattern {
                    pattern: pat.clone(),
                    reason: e.to_string(),
                })?;
                if re.is_match(&self.replacement) {
                    return Err(DomainError::InvalidPattern {
                        pattern: pat.clone(),
                        reason: "replacement matches the pattern; rule is not idempotent"
                            .into(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Apply this rule to `content`, returning the rewritten text and the
    /// number of replacements made. Zero replacements is a no-op, not an
    /// error; already-patched text simply no longer matches.
    pub fn apply(&self, content: &str) -> Result<(String, usize), DomainError> {
        match &self.pattern {
            PatchPattern::Literal(pat) => {
                let count = content.matches(pat.as_str()).count();
                if count == 0 {
                    return Ok((content.to_string(), 0));
                }
                Ok((content.replace(pat.as_str(), &self.replacement), count))
            }
            PatchPattern::Regex(pat) => {
                let re = Regex::new(pat).map_err(|e| DomainError::InvalidPattern {
                    pattern: pat.clone(),
                    reason: e.to_string(),
                })?;
                let count = re.find_iter(content).count();
                if count == 0 {
                    return Ok((content.to_string(), 0));
                }
                Ok((
                    re.replace_all(content, self.replacement.as_str()).into_owned(),
                    count,
                ))
            }
        }
    }
}

// ── TargetFile ────────────────────────────────────────────────────────────────

/// Whether a missing target file voids the invocation or only itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Necessity {
    /// Must exist; a miss means the build tool's whole file set stays
    /// unwritten.
    Required,
    /// May be absent; a miss skips this entry and siblings proceed.
    Optional,
}

/// One file a patch plan rewrites, with the rules that apply to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFile {
    path: PathBuf,
    necessity: Necessity,
    rules: Vec<PatchRule>,
}

impl TargetFile {
    pub fn required(path: impl Into<PathBuf>, rules: Vec<PatchRule>) -> Self {
        Self {
            path: path.into(),
            necessity: Necessity::Required,
            rules,
        }
    }

    pub fn optional(path: impl Into<PathBuf>, rules: Vec<PatchRule>) -> Self {
        Self {
            path: path.into(),
            necessity: Necessity::Optional,
            rules,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn necessity(&self) -> Necessity {
        self.necessity
    }

    pub fn rules(&self) -> &[PatchRule] {
        &self.rules
    }

    /// Run every rule over `content` in order, returning the final text and
    /// the total replacement count across rules.
    pub fn apply_to(&self, content: &str) -> Result<(String, usize), DomainError> {
        let mut text = content.to_string();
        let mut total = 0;
        for rule in &self.rules {
            let (next, count) = rule.apply(&text)?;
            text = next;
            total += count;
        }
        Ok((text, total))
    }
}

// ── PatchPlan ─────────────────────────────────────────────────────────────────

/// Every file rewrite owed to one build tool, in application order.
///
/// Plans come from a `RuleCatalog` implementation, either the compiled-in
/// defaults or caller-supplied data. A plan is pure data; the patcher owns
/// all filesystem interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchPlan {
    build_tool: BuildTool,
    entries: Vec<TargetFile>,
}

impl PatchPlan {
    pub fn new(build_tool: BuildTool) -> Self {
        Self {
            build_tool,
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: TargetFile) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build_tool(&self) -> BuildTool {
        self.build_tool
    }

    pub fn entries(&self) -> &[TargetFile] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the plan: at least one entry, and every rule well-formed.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidPlan(format!(
                "no target files for build tool '{}'",
                self.build_tool
            )));
        }
        for entry in &self.entries {
            if entry.rules.is_empty() {
                return Err(DomainError::InvalidPlan(format!(
                    "target '{}' has no rules",
                    entry.path.display()
                )));
            }
            for rule in &entry.rules {
                rule.validate()?;
            }
        }
        Ok(())
    }
}
