use serde::{Deserialize, Serialize};

use crate::rules::Rule;

/// A single policy violation discovered during a check.
///
/// Violations are immutable once created and appended to an ordered list in
/// traversal discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: Rule,
    /// 1-based source line; 0 means the violation has no specific location.
    pub line: u32,
    /// Extra context appended to the catalog description (offending name,
    /// decorator count, annotation spelling).
    pub detail: Option<String>,
}

impl Violation {
    pub fn new(rule: Rule, line: u32) -> Self {
        Self {
            rule,
            line,
            detail: None,
        }
    }

    pub fn with_detail(rule: Rule, line: u32, detail: impl Into<String>) -> Self {
        Self {
            rule,
            line,
            detail: Some(detail.into()),
        }
    }

    /// Catalog description plus the optional detail suffix.
    pub fn message(&self) -> String {
        match &self.detail {
            Some(d) => format!("{} : {}", self.rule.description(), d),
            None => self.rule.description().to_string(),
        }
    }
}

impl std::fmt::Display for Violation {
    /// The wire shape consumed by the boundary layer: `Line {n}: {message}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message())
    }
}

/// Consumer-facing diagnostic record.
///
/// Line and column are zero-based and absent when the source violation
/// carried no location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

impl Diagnostic {
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            col: None,
        }
    }

    pub fn positioned(message: impl Into<String>, line: u32, col: u32) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
            col: Some(col),
        }
    }
}

/// Result of linting one source unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    pub file: String,
    pub status: String, // "ok" | "error"
    pub diagnostics: Vec<Diagnostic>,
}

impl LintReport {
    pub fn new(file: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        let status = if diagnostics.is_empty() { "ok" } else { "error" };
        Self {
            file: file.into(),
            status: status.to_string(),
            diagnostics,
        }
    }
}
