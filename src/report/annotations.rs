//! GitHub Actions workflow annotations
//!
//! Emits one `::error` / `::warning` workflow command per issue so CI shows
//! the problem inline on the pull request diff.

use crate::validation::{Severity, ValidationIssue};

/// Escape a message per the workflow-command format
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Property values additionally escape the separators
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Detail string: present context fields joined with ` | `
pub fn annotation_detail(issue: &ValidationIssue) -> String {
    issue
        .details()
        .into_iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render one annotation line for an issue in `file`
pub fn render_annotation(file: &str, issue: &ValidationIssue) -> String {
    let command = match issue.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };

    format!(
        "::{} file={},line={},endLine={},title={}::{}",
        command,
        escape_property(file),
        issue.line,
        issue.line,
        escape_property(&issue.message),
        escape_data(&annotation_detail(issue))
    )
}

/// Render annotations for every issue, one per line
pub fn render(file: &str, issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| render_annotation(file, issue) + "\n")
        .collect()
}
