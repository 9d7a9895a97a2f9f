//! Parent/child containment by heading level
//!
//! A document's structural parent is the nearest preceding document with a
//! strictly lower level. An ancestor stack maintained in file order yields that
//! parent without scanning backwards.

use crate::catalog::{describe_children, permitted_children, DocumentType};
use crate::parser::Document;
use crate::validation::{IssueKind, ValidationIssue};

/// Check every document against its structural parent's permitted children
pub fn validate_nesting(docs: &[Document]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut ancestors: Vec<&Document> = Vec::new();

    for doc in docs {
        while ancestors.last().is_some_and(|top| top.level >= doc.level) {
            ancestors.pop();
        }

        if let Some(parent) = ancestors.last() {
            if let Some(issue) = check_pair(parent, doc) {
                issues.push(issue);
            }
        }

        ancestors.push(doc);
    }

    issues
}

fn check_pair(parent: &Document, child: &Document) -> Option<ValidationIssue> {
    let child_type = child.doc_type?;
    if child_type == DocumentType::NeededResearch {
        return None;
    }
    let parent_type = parent.doc_type?;

    if permitted_children(parent_type).contains(&child_type) {
        return None;
    }

    let allowed = describe_children(parent_type);
    Some(
        ValidationIssue::error(
            child.line,
            IssueKind::Nesting,
            format!(
                "{} document {} cannot be nested under {} document {}",
                child_type, child.doc_no, parent_type, parent.doc_no
            ),
            format!(
                "Move {} under a document that may contain {} documents, or change its heading level",
                child.doc_no, child_type
            ),
        )
        .found(format!("{} under {}", child.describe(), parent.describe()))
        .expected(format!("{} may contain: {}", parent_type, allowed)),
    )
}
