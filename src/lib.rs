//! Atlas Document Validator
//!
//! Validates structured Atlas Markdown documents and reports precise,
//! line-addressable issues.
//!
//! This library provides:
//! - Title parsing and document extraction
//! - Six independent rule passes (hierarchy, blank lines, extra fields,
//!   document numbers, nesting, UUIDs)
//! - Text, JSON and GitHub Actions report rendering
//! - A language server publishing the same issues as diagnostics

pub mod catalog;
pub mod config;
pub mod lsp;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use catalog::DocumentType;
pub use config::Config;
pub use parser::{extract_documents, Document};
pub use validation::{validate_document, Severity, ValidationIssue, ValidationResult};
