//! Report Rendering
//!
//! Turns a [`ValidationResult`] into text, JSON or CI annotations. Nothing in
//! here feeds back into validation.

pub mod annotations;
pub mod text;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::validation::ValidationResult;

/// Output format for the main report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render the JSON report
pub fn render_json(file: &str, result: &ValidationResult) -> anyhow::Result<String> {
    let report = json!({
        "file": file,
        "valid": result.is_valid(),
        "errors": result.error_count(),
        "warnings": result.warning_count(),
        "issues": result.issues,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render the main report in the requested format
pub fn render(format: OutputFormat, file: &str, result: &ValidationResult) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(file, result)),
        OutputFormat::Json => render_json(file, result).map(|s| s + "\n"),
    }
}
