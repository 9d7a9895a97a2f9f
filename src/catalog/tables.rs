//! Static rule tables
//!
//! Required extra fields and permitted children per document type. These are
//! compile-time constants, not configuration.

use super::document_type::DocumentType::{self, *};

/// Required extra fields for a document type, in canonical order
pub fn required_fields(doc_type: DocumentType) -> &'static [&'static str] {
    match doc_type {
        Scenario | ScenarioVariation => &["Description", "Finding", "Additional Guidance"],
        TypeSpecification => &["Components", "Additional Guidance"],
        NeededResearch => &["Content"],
        Scope | Article | Section | Core | ActiveDataController | Annotation | ActionTenet
        | ActiveData => &[],
    }
}

/// Document types allowed directly beneath a parent of the given type
pub fn permitted_children(parent: DocumentType) -> &'static [DocumentType] {
    match parent {
        Scope => &[Article],
        Article => &[Section, Annotation, ActionTenet],
        Section => &[
            Section,
            Core,
            TypeSpecification,
            ActiveDataController,
            Annotation,
            ActionTenet,
        ],
        Core => &[
            Core,
            TypeSpecification,
            ActiveDataController,
            Annotation,
            ActionTenet,
        ],
        TypeSpecification => &[Core, Annotation, ActionTenet],
        ActiveDataController => &[ActiveData, Annotation, ActionTenet],
        ActionTenet => &[Scenario],
        Scenario => &[ScenarioVariation],
        Annotation | ScenarioVariation | ActiveData | NeededResearch => &[],
    }
}

/// Human-readable rendering of a permitted-children set
pub fn describe_children(parent: DocumentType) -> String {
    let children = permitted_children(parent);
    if children.is_empty() {
        "no children".to_string()
    } else {
        children
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
