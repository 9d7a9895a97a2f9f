//! Validation Engine
//!
//! Six independent rule passes over the shared document sequence, plus the
//! aggregator that merges them.

pub mod blank_line;
pub mod doc_number;
pub mod engine;
pub mod extra_fields;
pub mod hierarchy;
pub mod issue;
pub mod nesting;
pub mod uuid;

pub use engine::{validate_document, ValidationResult};
pub use issue::{IssueKind, Severity, ValidationIssue};
