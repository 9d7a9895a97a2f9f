//! Atlas Title Parser
//!
//! Recognizes heading lines that carry an Atlas title and turns them into
//! [`Document`] records. Everything else in the file is ignored here.

pub mod document;
pub mod title;

pub use document::Document;
pub use title::{parse_title, TitleParse};

use crate::validation::ValidationIssue;

/// Documents and parse-time issues found in one file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Successfully parsed documents, in line order
    pub documents: Vec<Document>,
    pub issues: Vec<ValidationIssue>,
}

/// Split content into lines the way every pass addresses them
pub fn split_lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

/// Cheap pre-filter: only these lines are handed to the title parser
pub fn is_title_candidate(line: &str) -> bool {
    line.starts_with('#') && line.contains('[') && line.contains(']') && line.contains("UUID")
}

/// Extract every Atlas document from already-split lines
pub fn extract_documents(lines: &[&str]) -> Extraction {
    let mut extraction = Extraction::default();

    for (idx, line) in lines.iter().enumerate() {
        if !is_title_candidate(line) {
            continue;
        }

        let parsed = parse_title(line, idx + 1);
        if let Some(issue) = parsed.issue {
            extraction.issues.push(issue);
        }
        if let Some(document) = parsed.document {
            extraction.documents.push(document);
        }
    }

    log::debug!(
        "extracted {} documents with {} parse issues",
        extraction.documents.len(),
        extraction.issues.len()
    );

    extraction
}
