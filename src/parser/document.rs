//! Atlas Document record
//!
//! One recognized heading line. Pure data, no validation logic.

use serde::Serialize;

use crate::catalog::DocumentType;

/// A parsed Atlas title line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// 1-based source line of the title
    pub line: usize,
    /// Count of leading `#` markers, always at least 1
    pub level: usize,
    pub doc_no: String,
    pub name: String,
    /// `None` when the bracketed label is not a known type
    pub doc_type: Option<DocumentType>,
    /// Label exactly as written between the brackets
    pub type_label: String,
    /// Identifier from the UUID comment, trimmed, possibly empty
    pub uuid: String,
    pub raw_line: String,
}

impl Document {
    /// The heading markers for this document's level, e.g. `###`
    pub fn markers(&self) -> String {
        "#".repeat(self.level)
    }

    /// Short identity used in cross-document messages
    pub fn describe(&self) -> String {
        format!("{} [{}] (line {})", self.doc_no, self.type_label, self.line)
    }
}
