// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for report embedding)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("unsupported build tool '{tool}' (supported: maven, gradle)")]
    UnsupportedBuildTool { tool: String },

    #[error("invalid hook point: {value}")]
    InvalidHookPoint { value: String },

    #[error("invalid patch pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid patch plan: {0}")]
    InvalidPlan(String),

    #[error("invalid hook record: {0}")]
    InvalidHookRecord(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("required configuration field missing: {field}")]
    MissingField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedBuildTool { tool } => vec![
                format!("'{}' is not a build tool this adapter can patch", tool),
                "Supported build tools:".into(),
                "  • maven (patches pom.xml)".into(),
                "  • gradle (patches gradle/profile_*.gradle)".into(),
            ],
            Self::MissingField { field } => vec![
                format!("The project configuration does not set '{}'", field),
                "Run the host generator first so the project configuration is complete".into(),
            ],
            Self::InvalidPattern { pattern, .. } => vec![
                format!("The rule pattern '{}' does not compile", pattern),
                "Check the rule catalog supplying this build tool's patches".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedBuildTool { .. }
            | Self::InvalidHookPoint { .. }
            | Self::InvalidPattern { .. }
            | Self::InvalidPlan(_)
            | Self::InvalidHookRecord(_) => ErrorCategory::Validation,
            Self::MissingField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
