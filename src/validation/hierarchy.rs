//! Heading-level progression between consecutive documents

use crate::parser::Document;
use crate::validation::{IssueKind, ValidationIssue};

/// Flag any consecutive pair whose level increases by more than one
pub fn validate_hierarchy(docs: &[Document]) -> Vec<ValidationIssue> {
    docs.windows(2)
        .filter_map(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.level <= prev.level + 1 {
                return None;
            }

            let missing = "#".repeat(prev.level + 1);
            Some(
                ValidationIssue::error(
                    next.line,
                    IssueKind::Hierarchy,
                    format!(
                        "Heading level skipped: '{}' follows '{}' on line {}",
                        next.markers(),
                        prev.markers(),
                        prev.line
                    ),
                    format!(
                        "Insert a '{}' heading between line {} and line {}, or promote this heading",
                        missing, prev.line, next.line
                    ),
                )
                .found(format!("{} {}", next.markers(), next.doc_no))
                .expected(format!("at most '{}' after '{}'", missing, prev.markers()))
                .reason("Each heading may be at most one level deeper than the one before it"),
            )
        })
        .collect()
}
