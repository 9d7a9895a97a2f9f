//! UUID format and uniqueness
//!
//! The format check is deliberately lenient: any hexadecimal 8-4-4-4-12
//! grouping is accepted, version and variant nibbles are not inspected.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::parser::Document;
use crate::validation::{IssueKind, ValidationIssue};

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is valid")
});

const UUID_EXAMPLE: &str = "8650a584-01f8-45d6-882b-c14eab9879c4";

pub fn is_valid_uuid(uuid: &str) -> bool {
    UUID_RE.is_match(uuid)
}

/// Check identifiers in file order, remembering the first owner of each
pub fn validate_uuids(docs: &[Document]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<String, &Document> = HashMap::new();

    for doc in docs {
        let uuid = doc.uuid.trim();

        if uuid.is_empty() {
            issues.push(
                ValidationIssue::warning(
                    doc.line,
                    IssueKind::Uuid,
                    format!("Empty UUID for document {}", doc.doc_no),
                    "Generate a UUID and place it in the title's UUID comment",
                )
                .expected("8-4-4-4-12 hexadecimal UUID")
                .example(UUID_EXAMPLE),
            );
            continue;
        }

        if !is_valid_uuid(uuid) {
            issues.push(
                ValidationIssue::error(
                    doc.line,
                    IssueKind::Uuid,
                    format!("Invalid UUID format for document {}", doc.doc_no),
                    "Replace the identifier with a well-formed UUID",
                )
                .found(uuid)
                .expected("8-4-4-4-12 hexadecimal UUID")
                .example(UUID_EXAMPLE),
            );
            continue;
        }

        let key = uuid.to_ascii_lowercase();
        match seen.get(&key) {
            Some(first) => issues.push(
                ValidationIssue::error(
                    doc.line,
                    IssueKind::Uuid,
                    format!(
                        "Duplicate UUID: {} reuses the identifier of {}",
                        doc.doc_no,
                        first.describe()
                    ),
                    "Generate a new UUID for this document",
                )
                .found(uuid)
                .reason(format!(
                    "First used on line {} by {}",
                    first.line, first.doc_no
                )),
            ),
            None => {
                seen.insert(key, doc);
            }
        }
    }

    issues
}
