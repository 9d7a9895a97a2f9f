//! Atlas document types
//!
//! Twelve fixed labels. Parsing is exact and case-sensitive: `[core]` is not
//! a `Core` document.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the twelve recognized Atlas document types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentType {
    Scope,
    Article,
    Section,
    Core,
    TypeSpecification,
    ActiveDataController,
    Annotation,
    ActionTenet,
    Scenario,
    ScenarioVariation,
    ActiveData,
    NeededResearch,
}

impl DocumentType {
    /// Every type, in catalog order
    pub const ALL: [DocumentType; 12] = [
        DocumentType::Scope,
        DocumentType::Article,
        DocumentType::Section,
        DocumentType::Core,
        DocumentType::TypeSpecification,
        DocumentType::ActiveDataController,
        DocumentType::Annotation,
        DocumentType::ActionTenet,
        DocumentType::Scenario,
        DocumentType::ScenarioVariation,
        DocumentType::ActiveData,
        DocumentType::NeededResearch,
    ];

    /// The label as it appears between brackets in a title line
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Scope => "Scope",
            DocumentType::Article => "Article",
            DocumentType::Section => "Section",
            DocumentType::Core => "Core",
            DocumentType::TypeSpecification => "Type Specification",
            DocumentType::ActiveDataController => "Active Data Controller",
            DocumentType::Annotation => "Annotation",
            DocumentType::ActionTenet => "Action Tenet",
            DocumentType::Scenario => "Scenario",
            DocumentType::ScenarioVariation => "Scenario Variation",
            DocumentType::ActiveData => "Active Data",
            DocumentType::NeededResearch => "Needed Research",
        }
    }

    /// Look up a type by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// All labels joined for use in diagnostics
    pub fn valid_labels() -> String {
        Self::ALL
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown document type '{}'", s))
    }
}
