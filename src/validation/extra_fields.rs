//! Extra Field Validation
//!
//! Some document types carry labelled metadata blocks (`**Label**:` on a line of
//! its own, a blank line, then content). For those types this pass checks that
//! every required label is present, that no unknown label appears, that the
//! recognized labels appear in canonical order, and that each label is followed
//! by a blank line.

use regex::Regex;
use std::sync::LazyLock;

use crate::catalog::{required_fields, DocumentType};
use crate::parser::Document;
use crate::validation::{IssueKind, ValidationIssue};

static FIELD_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*([^*]+)\*\*:$").expect("field label pattern is valid")
});

/// A `**Label**:` marker found in a document body
#[derive(Debug, Clone, PartialEq)]
struct FieldMarker<'a> {
    /// 1-based line of the label
    line: usize,
    label: &'a str,
}

/// Return the label if the line is a bold label with nothing else on it
pub fn field_label(line: &str) -> Option<&str> {
    FIELD_LABEL_RE
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Check extra fields for every document whose type registers any
pub fn validate_extra_fields(lines: &[&str], docs: &[Document]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (idx, doc) in docs.iter().enumerate() {
        let Some(doc_type) = doc.doc_type else {
            continue;
        };
        let required = required_fields(doc_type);
        if required.is_empty() {
            continue;
        }

        // Body is everything strictly between this title and the next one
        let body_end = docs
            .get(idx + 1)
            .map(|next| next.line - 1)
            .unwrap_or(lines.len());
        let markers = collect_markers(lines, doc.line, body_end);

        check_document(lines, doc, doc_type, required, &markers, &mut issues);
    }

    issues
}

/// Field markers within 0-based line range `start..end`
fn collect_markers<'a>(lines: &[&'a str], start: usize, end: usize) -> Vec<FieldMarker<'a>> {
    let end = end.min(lines.len());
    if start >= end {
        return Vec::new();
    }

    lines[start..end]
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(offset, line)| {
            field_label(line).map(|label| FieldMarker {
                line: start + offset + 1,
                label,
            })
        })
        .collect()
}

fn check_document(
    lines: &[&str],
    doc: &Document,
    doc_type: DocumentType,
    required: &[&str],
    markers: &[FieldMarker<'_>],
    issues: &mut Vec<ValidationIssue>,
) {
    let valid_list = required.join(", ");

    for marker in markers {
        if !required.contains(&marker.label) {
            issues.push(
                ValidationIssue::error(
                    marker.line,
                    IssueKind::ExtraField,
                    format!(
                        "Unknown field '{}' in {} document {}",
                        marker.label, doc_type, doc.doc_no
                    ),
                    format!("Remove or rename the field; valid fields are: {}", valid_list),
                )
                .found(format!("**{}**:", marker.label))
                .expected(valid_list.clone()),
            );
        }

        // marker.line is 1-based, so it indexes the following line directly
        if let Some(next) = lines.get(marker.line) {
            if !next.trim().is_empty() {
                issues.push(
                    ValidationIssue::error(
                        marker.line + 1,
                        IssueKind::ExtraField,
                        format!("Missing blank line after field '{}'", marker.label),
                        format!("Insert an empty line after line {}", marker.line),
                    )
                    .found(next.trim())
                    .expected("an empty line")
                    .example(format!("**{}**:\n\n<content>", marker.label)),
                );
            }
        }
    }

    // Relative order among recognized fields only
    let found_recognized: Vec<&str> = markers
        .iter()
        .map(|m| m.label)
        .filter(|label| required.contains(label))
        .collect();
    let expected_order: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| found_recognized.contains(field))
        .collect();

    if found_recognized != expected_order {
        issues.push(
            ValidationIssue::error(
                doc.line,
                IssueKind::ExtraField,
                format!("Fields of {} document {} are out of order", doc_type, doc.doc_no),
                format!("Reorder the fields as: {}", valid_list),
            )
            .found(found_recognized.join(", "))
            .expected(valid_list.clone()),
        );
    }

    for field in required {
        if !markers.iter().any(|m| m.label == *field) {
            issues.push(
                ValidationIssue::error(
                    doc.line,
                    IssueKind::ExtraField,
                    format!(
                        "Missing required field '{}' in {} document {}",
                        field, doc_type, doc.doc_no
                    ),
                    format!("Add a '**{}**:' block to the document body", field),
                )
                .expected(valid_list.clone())
                .example(format!("**{}**:\n\n<content>", field)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{extract_documents, split_lines};

    const SCENARIO_TITLE: &str = "##### A.1.2.0.4.1.1.1 - Case [Scenario]  <!-- UUID:  -->";

    fn run(content: &str) -> Vec<ValidationIssue> {
        let lines = split_lines(content);
        let extraction = extract_documents(&lines);
        validate_extra_fields(&lines, &extraction.documents)
    }

    fn scenario(body: &str) -> String {
        format!("{}\n\n{}", SCENARIO_TITLE, body)
    }

    #[test]
    fn test_field_label_pattern() {
        assert_eq!(field_label("**Finding**:"), Some("Finding"));
        assert_eq!(field_label("  **Additional Guidance**:  "), Some("Additional Guidance"));
        assert_eq!(field_label("**Finding**: inline content"), None);
        assert_eq!(field_label("**Finding**"), None);
        assert_eq!(field_label("Finding:"), None);
    }

    #[test]
    fn test_complete_scenario_is_valid() {
        let content = scenario(
            "**Description**:\n\nd\n\n**Finding**:\n\nf\n\n**Additional Guidance**:\n\ng\n",
        );
        assert!(run(&content).is_empty());
    }

    #[test]
    fn test_types_without_fields_are_skipped() {
        let content = "### A.1.1 - Rule [Core]\n\n**Whatever**:\nx\n"
            .replace("[Core]", "[Core]  <!-- UUID:  -->");
        assert!(run(&content).is_empty());
    }

    #[test]
    fn test_unknown_field_is_reported_on_its_line() {
        let content = scenario(
            "**Description**:\n\nd\n\n**Notes**:\n\nn\n\n**Finding**:\n\nf\n\n**Additional Guidance**:\n\ng\n",
        );
        let issues = run(&content);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 7);
        assert!(issues[0].message.contains("Unknown field 'Notes'"));
    }

    #[test]
    fn test_missing_blank_line_after_label() {
        let content = scenario(
            "**Description**:\nd\n\n**Finding**:\n\nf\n\n**Additional Guidance**:\n\ng\n",
        );
        let issues = run(&content);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 4);
        assert_eq!(issues[0].found.as_deref(), Some("d"));
    }

    #[test]
    fn test_wrong_order_is_single_issue() {
        let content = scenario(
            "**Finding**:\n\nf\n\n**Description**:\n\nd\n\n**Additional Guidance**:\n\ng\n",
        );
        let issues = run(&content);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 1);
        assert_eq!(
            issues[0].found.as_deref(),
            Some("Finding, Description, Additional Guidance")
        );
    }

    #[test]
    fn test_partial_fields_in_order_only_report_missing() {
        let content = scenario("**Description**:\n\nd\n\n**Additional Guidance**:\n\ng\n");
        let issues = run(&content);

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Missing required field 'Finding'"));
    }

    #[test]
    fn test_body_stops_at_next_title() {
        let content = format!(
            "{}\n\n**Description**:\n\nd\n\n{}\n\n**Finding**:\n\nf\n",
            SCENARIO_TITLE,
            "###### A.1.2.0.4.1.1.1.var1 - Var [Scenario Variation]  <!-- UUID:  -->"
        );
        let issues = run(&content);

        // Scenario misses Finding and Additional Guidance; the variation misses
        // Description and Additional Guidance
        let missing: Vec<_> = issues
            .iter()
            .filter(|i| i.message.starts_with("Missing required field"))
            .map(|i| i.line)
            .collect();
        assert_eq!(missing, vec![1, 1, 7, 7]);
        assert_eq!(issues.len(), 4);
    }

    #[test]
    fn test_empty_body_reports_every_missing_field() {
        let issues = run(SCENARIO_TITLE);
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.line == 1));
    }
}
