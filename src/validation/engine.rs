//! Validation Engine
//!
//! Runs extraction and every rule pass over one file's content and merges the
//! results into a single line-ordered report.

use crate::parser::{extract_documents, split_lines, Document};
use crate::validation::blank_line::validate_blank_lines;
use crate::validation::doc_number::validate_doc_numbers;
use crate::validation::extra_fields::validate_extra_fields;
use crate::validation::hierarchy::validate_hierarchy;
use crate::validation::issue::{Severity, ValidationIssue};
use crate::validation::nesting::validate_nesting;
use crate::validation::uuid::validate_uuids;

/// Result of validating a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Issues in ascending line order
    pub issues: Vec<ValidationIssue>,
    pub documents: Vec<Document>,
}

impl ValidationResult {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Warnings don't make a result invalid
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Validate an entire Atlas document
pub fn validate_document(content: &str) -> ValidationResult {
    let lines = split_lines(content);
    let extraction = extract_documents(&lines);
    let docs = &extraction.documents;

    let mut issues = extraction.issues;
    // The sort below is stable, so this order decides ties on the same line
    let passes: [(&str, Vec<ValidationIssue>); 6] = [
        ("hierarchy", validate_hierarchy(docs)),
        ("blank-line", validate_blank_lines(&lines, docs)),
        ("extra-field", validate_extra_fields(&lines, docs)),
        ("document-number", validate_doc_numbers(docs)),
        ("nesting", validate_nesting(docs)),
        ("uuid", validate_uuids(docs)),
    ];
    for (name, pass_issues) in passes {
        log::debug!("{} pass reported {} issues", name, pass_issues.len());
        issues.extend(pass_issues);
    }

    issues.sort_by_key(|issue| issue.line);

    ValidationResult {
        issues,
        documents: extraction.documents,
    }
}
