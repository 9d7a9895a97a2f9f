use tower_lsp::jsonrpc::Result as LspResult;
use tower_lsp::lsp_types::*;

use crate::catalog::{describe_children, required_fields, DocumentType};
use crate::lsp::backend::Backend;
use crate::parser::Document;
use crate::validation::{Severity, ValidationIssue};

pub const DIAGNOSTIC_SOURCE: &str = "atlas-lint";

/// Trait for handling hover requests
#[tower_lsp::async_trait]
pub trait HandleHover {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>>;
}

/// Trait for handling document symbols
#[tower_lsp::async_trait]
pub trait HandleDocumentSymbol {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>>;
}

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
}

#[tower_lsp::async_trait]
impl HandleHover for Backend {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>> {
        let tdpp = params.text_document_position_params;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&tdpp.text_document.uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let line_num = tdpp.position.line as usize + 1;
        let Some(doc) = doc_state.result.documents.iter().find(|d| d.line == line_num) else {
            return Ok(None);
        };

        Ok(Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: hover_text(doc),
            }),
            range: None,
        }))
    }
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Publish diagnostics for a document
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return,
        };

        let lines: Vec<&str> = doc_state.content.lines().collect();
        let diagnostics: Vec<_> = doc_state
            .result
            .issues
            .iter()
            .map(|issue| to_lsp_diagnostic(issue, &lines))
            .collect();
        drop(docs);

        log::debug!("publishing {} diagnostics for {}", diagnostics.len(), uri);
        self.client.publish_diagnostics(uri, diagnostics, None).await;
    }
}

#[tower_lsp::async_trait]
impl HandleDocumentSymbol for Backend {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>> {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&params.text_document.uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let symbols = document_outline(&doc_state.result.documents, &doc_state.content);
        if symbols.is_empty() {
            Ok(None)
        } else {
            Ok(Some(DocumentSymbolResponse::Nested(symbols)))
        }
    }
}

/// Convert a validation issue into an LSP diagnostic covering its whole line
pub fn to_lsp_diagnostic(issue: &ValidationIssue, lines: &[&str]) -> Diagnostic {
    let line = issue.line.saturating_sub(1) as u32;
    let end_char = lines
        .get(issue.line.saturating_sub(1))
        .map(|l| l.encode_utf16().count() as u32)
        .unwrap_or(0);

    let severity = match issue.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    };

    Diagnostic::new(
        Range::new(Position::new(line, 0), Position::new(line, end_char)),
        Some(severity),
        Some(NumberOrString::String(issue.kind.as_str().to_string())),
        Some(DIAGNOSTIC_SOURCE.to_string()),
        format!("{}\nAction: {}", issue.message, issue.action),
        None,
        None,
    )
}

fn symbol_kind(doc_type: Option<DocumentType>) -> SymbolKind {
    match doc_type {
        Some(DocumentType::Scope) => SymbolKind::NAMESPACE,
        Some(DocumentType::Article) => SymbolKind::MODULE,
        Some(DocumentType::Section) => SymbolKind::CLASS,
        Some(DocumentType::Core) | Some(DocumentType::TypeSpecification) => SymbolKind::STRUCT,
        Some(DocumentType::ActiveDataController) => SymbolKind::INTERFACE,
        Some(DocumentType::ActiveData) => SymbolKind::FIELD,
        Some(DocumentType::Annotation) => SymbolKind::PROPERTY,
        Some(DocumentType::ActionTenet) => SymbolKind::FUNCTION,
        Some(DocumentType::Scenario) => SymbolKind::METHOD,
        Some(DocumentType::ScenarioVariation) => SymbolKind::ENUM_MEMBER,
        Some(DocumentType::NeededResearch) => SymbolKind::KEY,
        None => SymbolKind::NULL,
    }
}

/// Build the nested outline of parsed documents
///
/// A document's range runs from its title to the line before the next
/// document at the same or a shallower level.
pub fn document_outline(docs: &[Document], content: &str) -> Vec<DocumentSymbol> {
    let lines: Vec<&str> = content.lines().collect();
    let mut roots = Vec::new();
    let mut stack: Vec<(usize, DocumentSymbol)> = Vec::new();

    for (idx, doc) in docs.iter().enumerate() {
        let start = doc.line - 1;
        let end = docs[idx + 1..]
            .iter()
            .find(|next| next.level <= doc.level)
            .map(|next| next.line - 2)
            .unwrap_or(lines.len().saturating_sub(1))
            .max(start);
        let end_char = lines
            .get(end)
            .map(|l| l.encode_utf16().count() as u32)
            .unwrap_or(0);
        let title_len = doc.raw_line.encode_utf16().count() as u32;

        #[allow(deprecated)]
        let symbol = DocumentSymbol {
            name: format!("{} - {}", doc.doc_no, doc.name),
            detail: Some(doc.type_label.clone()),
            kind: symbol_kind(doc.doc_type),
            tags: None,
            deprecated: None,
            range: Range::new(
                Position::new(start as u32, 0),
                Position::new(end as u32, end_char),
            ),
            selection_range: Range::new(
                Position::new(start as u32, 0),
                Position::new(start as u32, title_len),
            ),
            children: None,
        };

        while stack.last().is_some_and(|(level, _)| *level >= doc.level) {
            if let Some((_, done)) = stack.pop() {
                attach(&mut stack, &mut roots, done);
            }
        }
        stack.push((doc.level, symbol));
    }

    while let Some((_, done)) = stack.pop() {
        attach(&mut stack, &mut roots, done);
    }

    roots
}

fn attach(
    stack: &mut [(usize, DocumentSymbol)],
    roots: &mut Vec<DocumentSymbol>,
    symbol: DocumentSymbol,
) {
    match stack.last_mut() {
        Some((_, parent)) => parent.children.get_or_insert_with(Vec::new).push(symbol),
        None => roots.push(symbol),
    }
}

/// Markdown shown when hovering a title line
pub fn hover_text(doc: &Document) -> String {
    let mut text = format!("**{} - {}**\n\n", doc.doc_no, doc.name);

    let Some(doc_type) = doc.doc_type else {
        text.push_str(&format!(
            "Unknown document type `{}`\n\nValid types: {}",
            doc.type_label,
            DocumentType::valid_labels()
        ));
        return text;
    };

    text.push_str(&format!("Type: `{}`\n\n", doc_type));
    text.push_str(&format!("May contain: {}", describe_children(doc_type)));

    let fields = required_fields(doc_type);
    if !fields.is_empty() {
        text.push_str("\n\n**Required fields:**");
        for field in fields {
            text.push_str(&format!("\n- `{}`", field));
        }
    }

    text
}
