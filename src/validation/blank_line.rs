//! Mandatory blank line after every title

use crate::parser::Document;
use crate::validation::{IssueKind, ValidationIssue};

/// Every title must be followed by a blank line; end of file is tolerated
pub fn validate_blank_lines(lines: &[&str], docs: &[Document]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for doc in docs {
        // doc.line is 1-based, so it indexes the following line directly
        let Some(next) = lines.get(doc.line) else {
            continue;
        };
        if next.trim().is_empty() {
            continue;
        }

        issues.push(
            ValidationIssue::error(
                doc.line + 1,
                IssueKind::BlankLine,
                format!("Missing blank line after title of {}", doc.doc_no),
                format!("Insert an empty line after line {}", doc.line),
            )
            .found(next.trim())
            .expected("an empty line")
            .reason("A title must be separated from its content by a blank line"),
        );
    }

    issues
}
