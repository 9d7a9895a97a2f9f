//! Human-readable report rendering

use std::fmt::Write;

use crate::validation::{Severity, ValidationIssue, ValidationResult};

/// Render one issue as an indented block
pub fn render_issue(issue: &ValidationIssue) -> String {
    let tag = match issue.severity {
        Severity::Error => "ERROR",
        Severity::Warning => "WARNING",
    };

    let mut block = format!("Line {}: [{}] {}\n", issue.line, tag, issue.message);
    for (label, value) in issue.details() {
        let mut lines = value.lines();
        let first = lines.next().unwrap_or_default();
        let _ = writeln!(block, "  {}: {}", label, first);
        // continuation lines line up under the value
        let indent = " ".repeat(label.len() + 4);
        for line in lines {
            if line.is_empty() {
                block.push('\n');
            } else {
                let _ = writeln!(block, "{}{}", indent, line);
            }
        }
    }
    block
}

/// Render the pass/fail summary line
pub fn render_summary(file: &str, result: &ValidationResult) -> String {
    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors == 0 {
        if warnings == 0 {
            format!("✓ {} passed validation", file)
        } else {
            format!("✓ {} passed validation with {} warning(s)", file, warnings)
        }
    } else {
        format!(
            "✗ {} failed validation: {} error(s), {} warning(s)",
            file, errors, warnings
        )
    }
}

/// Render the full text report
pub fn render(file: &str, result: &ValidationResult) -> String {
    let mut out = String::new();
    for issue in &result.issues {
        out.push_str(&render_issue(issue));
        out.push('\n');
    }
    out.push_str(&render_summary(file, result));
    out.push('\n');
    out
}
