//! Title Parser
//!
//! Turns one candidate heading line into a [`Document`], a format issue, or
//! (for an unknown type label) both.

use regex::Regex;
use std::sync::LazyLock;

use crate::catalog::DocumentType;
use crate::parser::document::Document;
use crate::validation::{IssueKind, ValidationIssue};

const TITLE_FORMAT: &str = "{#...} {docNo} - {name} [{type}]  <!-- UUID: {uuid} -->";
const TITLE_EXAMPLE: &str =
    "## A.1 - Intro [Section]  <!-- UUID: 8650a584-01f8-45d6-882b-c14eab9879c4 -->";

// markers, docNo, name, type, two spaces, uuid comment
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#+) (\S+) - (.+) \[([^\]]+)\]  <!-- UUID: ?(.*?) ?-->\s*$")
        .expect("title pattern is valid")
});

/// Outcome of parsing one title line
#[derive(Debug, Clone, PartialEq)]
pub struct TitleParse {
    pub document: Option<Document>,
    pub issue: Option<ValidationIssue>,
}

/// Parse a candidate title line at the given 1-based line number
pub fn parse_title(line: &str, line_num: usize) -> TitleParse {
    let Some(caps) = TITLE_RE.captures(line) else {
        return TitleParse {
            document: None,
            issue: Some(format_issue(line, line_num)),
        };
    };

    let type_label = caps[4].to_string();
    let doc_type = DocumentType::from_label(&type_label);

    let document = Document {
        line: line_num,
        level: caps[1].len(),
        doc_no: caps[2].to_string(),
        name: caps[3].trim().to_string(),
        doc_type,
        type_label: type_label.clone(),
        uuid: caps[5].trim().to_string(),
        raw_line: line.to_string(),
    };

    let issue = doc_type.is_none().then(|| {
        ValidationIssue::error(
            line_num,
            IssueKind::Type,
            format!("Invalid document type '{}'", type_label),
            "Use one of the recognized document types",
        )
        .found(type_label)
        .expected(DocumentType::valid_labels())
    });

    TitleParse {
        document: Some(document),
        issue,
    }
}

fn format_issue(line: &str, line_num: usize) -> ValidationIssue {
    ValidationIssue::error(
        line_num,
        IssueKind::Format,
        "Title line does not match the required format",
        "Rewrite the title to match the expected format; note the two spaces before the UUID comment",
    )
    .found(line.trim_end())
    .expected(TITLE_FORMAT)
    .example(TITLE_EXAMPLE)
}
