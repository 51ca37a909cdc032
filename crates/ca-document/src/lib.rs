//! ca-document: the persisted annotation document and its validation.
//!
//! The document is the single JSON shape exchanged with hosts: components
//! keyed by name, external ports keyed by name, and a list of connections.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_document};

use tracing::debug;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("Document root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a document from JSON text.
///
/// Missing `components`, `external_ports` or `connections` sections default to
/// empty. Anything that is not a JSON object is rejected outright.
pub fn from_json_str(content: &str) -> DocumentResult<Document> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(DocumentError::NotAnObject {
            found: json_kind(&value),
        });
    }
    let document: Document = serde_json::from_value(value)?;
    debug!(
        components = document.components.len(),
        external_ports = document.external_ports.len(),
        connections = document.connections.len(),
        "parsed annotation document"
    );
    Ok(document)
}

/// Pretty-printed JSON; non-ASCII names are written as-is, not escaped.
pub fn to_json_pretty(document: &Document) -> DocumentResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

pub fn load_json(path: &std::path::Path) -> DocumentResult<Document> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &std::path::Path, document: &Document) -> DocumentResult<()> {
    let content = to_json_pretty(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
