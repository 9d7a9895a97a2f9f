use crate::validation::{validate_document, ValidationResult};

/// State for each open document
#[derive(Debug)]
pub struct DocumentState {
    pub content: String,
    /// Validation of `content`, refreshed on every change
    pub result: ValidationResult,
}

impl DocumentState {
    pub fn new(content: String) -> Self {
        let result = validate_document(&content);
        Self { content, result }
    }
}
