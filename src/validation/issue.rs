//! Validation Issues
//!
//! The single output record of the engine. Issues are reported, never raised.

use serde::Serialize;
use std::fmt;

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// Which rule family produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// Title line looks like a heading but does not fit the grammar
    Format,
    /// Unrecognized document type label
    Type,
    Hierarchy,
    BlankLine,
    ExtraField,
    DocumentNumber,
    Nesting,
    Uuid,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Format => "format",
            IssueKind::Type => "type",
            IssueKind::Hierarchy => "hierarchy",
            IssueKind::BlankLine => "blank-line",
            IssueKind::ExtraField => "extra-field",
            IssueKind::DocumentNumber => "document-number",
            IssueKind::Nesting => "nesting",
            IssueKind::Uuid => "uuid",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported problem, anchored to a 1-based source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub line: usize,
    pub severity: Severity,
    pub kind: IssueKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Remediation hint; every issue carries one
    pub action: String,
}

impl ValidationIssue {
    pub fn error(
        line: usize,
        kind: IssueKind,
        message: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self::new(line, Severity::Error, kind, message.into(), action.into())
    }

    pub fn warning(
        line: usize,
        kind: IssueKind,
        message: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self::new(line, Severity::Warning, kind, message.into(), action.into())
    }

    fn new(
        line: usize,
        severity: Severity,
        kind: IssueKind,
        message: String,
        action: String,
    ) -> Self {
        Self {
            line,
            severity,
            kind,
            message,
            found: None,
            expected: None,
            reason: None,
            example: None,
            action,
        }
    }

    pub fn found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    pub fn expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Labelled diagnostic context in `found, expected, reason, example, action` order
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        let mut details = Vec::with_capacity(5);
        if let Some(found) = &self.found {
            details.push(("Found", found.as_str()));
        }
        if let Some(expected) = &self.expected {
            details.push(("Expected", expected.as_str()));
        }
        if let Some(reason) = &self.reason {
            details.push(("Reason", reason.as_str()));
        }
        if let Some(example) = &self.example {
            details.push(("Example", example.as_str()));
        }
        details.push(("Action", self.action.as_str()));
        details
    }
}
