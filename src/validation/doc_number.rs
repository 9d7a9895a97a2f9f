//! Document Number Validation
//!
//! Each document type constrains the shape of its document number. Rules are
//! evaluated in order and the first violated rule is the only one reported.

use regex::Regex;
use std::sync::LazyLock;

use crate::catalog::DocumentType;
use crate::parser::Document;
use crate::validation::{IssueKind, ValidationIssue};

static NEEDED_RESEARCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^NR-[1-9][0-9]*$").expect("needed research pattern is valid"));

/// A type-specific suffix rule
struct SuffixRule {
    pattern: &'static LazyLock<Regex>,
    expected: &'static str,
    example: &'static str,
    reason: &'static str,
}

static ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.0\.3\.[0-9]+$").expect("annotation pattern is valid"));
static ACTION_TENET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.0\.4\.[0-9]+$").expect("action tenet pattern is valid"));
static SCENARIO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.1\.[0-9]+$").expect("scenario pattern is valid"));
static SCENARIO_VARIATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.var[0-9]+$").expect("scenario variation pattern is valid"));
static ACTIVE_DATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.0\.6\.[0-9]+$").expect("active data pattern is valid"));

fn suffix_rule(doc_type: DocumentType) -> Option<SuffixRule> {
    let rule = match doc_type {
        DocumentType::Annotation => SuffixRule {
            pattern: &ANNOTATION_RE,
            expected: "{target}.0.3.{N}",
            example: "A.1.2.3.0.3.1",
            reason: "Annotations are numbered relative to the document they annotate",
        },
        DocumentType::ActionTenet => SuffixRule {
            pattern: &ACTION_TENET_RE,
            expected: "{target}.0.4.{N}",
            example: "A.1.2.3.0.4.1",
            reason: "Action Tenets are numbered relative to the document they apply to",
        },
        DocumentType::Scenario => SuffixRule {
            pattern: &SCENARIO_RE,
            expected: "{tenet}.1.{N}",
            example: "A.1.2.3.0.4.1.1.1",
            reason: "Scenarios are numbered beneath their Action Tenet",
        },
        DocumentType::ScenarioVariation => SuffixRule {
            pattern: &SCENARIO_VARIATION_RE,
            expected: "{scenario}.var{N}",
            example: "A.1.2.3.0.4.1.1.1.var1",
            reason: "Scenario Variations are numbered beneath their Scenario",
        },
        DocumentType::ActiveData => SuffixRule {
            pattern: &ACTIVE_DATA_RE,
            expected: "{controller}.0.6.{N}",
            example: "A.1.2.3.0.6.1",
            reason: "Active Data entries are numbered beneath their controller",
        },
        _ => return None,
    };
    Some(rule)
}

/// Types that must not carry a `.0.` segment past the `A.0` prefix
fn forbids_inner_zero_segment(doc_type: DocumentType) -> bool {
    matches!(
        doc_type,
        DocumentType::Core | DocumentType::TypeSpecification | DocumentType::ActiveDataController
    )
}

/// True when `.0.` occurs anywhere except as the `A.0` prefix
fn has_inner_zero_segment(doc_no: &str) -> bool {
    (0..doc_no.len())
        .filter(|&i| doc_no.is_char_boundary(i))
        .any(|i| i != 1 && doc_no[i..].starts_with(".0."))
}

/// Check a single document's number
pub fn check_doc_number(doc: &Document) -> Option<ValidationIssue> {
    let doc_no = doc.doc_no.as_str();

    if doc.doc_type == Some(DocumentType::NeededResearch) {
        if NEEDED_RESEARCH_RE.is_match(doc_no) {
            return None;
        }
        return Some(
            number_issue(doc, "NR-{N}")
                .reason("Needed Research documents use their own NR numbering")
                .example("NR-3"),
        );
    }

    if !doc_no.starts_with("A.") {
        return Some(
            number_issue(doc, "A.{...}")
                .reason("Document numbers start with the 'A.' prefix")
                .example("A.1.2"),
        );
    }

    let doc_type = doc.doc_type?;

    if forbids_inner_zero_segment(doc_type) && has_inner_zero_segment(doc_no) {
        return Some(
            number_issue(doc, "no '.0.' segment after the 'A.0' prefix")
                .reason(format!(
                    "A {} document cannot sit beneath a '.0.' supporting-document segment",
                    doc_type
                ))
                .example("A.1.2.3"),
        );
    }

    let rule = suffix_rule(doc_type)?;
    if rule.pattern.is_match(doc_no) {
        return None;
    }
    Some(
        number_issue(doc, rule.expected)
            .reason(rule.reason)
            .example(rule.example),
    )
}

fn number_issue(doc: &Document, expected: &str) -> ValidationIssue {
    ValidationIssue::error(
        doc.line,
        IssueKind::DocumentNumber,
        format!(
            "Invalid document number '{}' for {} document",
            doc.doc_no, doc.type_label
        ),
        format!("Renumber the document to match '{}'", expected),
    )
    .found(doc.doc_no.clone())
    .expected(expected)
}

/// Check every document's number
pub fn validate_doc_numbers(docs: &[Document]) -> Vec<ValidationIssue> {
    docs.iter().filter_map(check_doc_number).collect()
}
