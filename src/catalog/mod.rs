//! Document-Type Catalog
//!
//! The closed set of Atlas document types together with the static tables
//! that drive field and nesting validation.

pub mod document_type;
pub mod tables;

pub use document_type::DocumentType;
pub use tables::{describe_children, permitted_children, required_fields};
