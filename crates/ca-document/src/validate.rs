//! Document validation logic.

use std::collections::HashSet;

use crate::schema::{Document, EXTERNAL_OWNER};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name '{name}' is used by both a component and an external port")]
    NamespaceCollision { name: String },

    #[error("'external' is reserved and cannot name a component")]
    ReservedComponentName,

    #[error("Duplicate port '{port}' on component '{component}'")]
    DuplicatePort { component: String, port: String },

    #[error("Connection {index} has {count} endpoint(s); at least 2 are required")]
    ShortConnection { index: usize, count: usize },

    #[error("Connection {index} lists {component}.{port} more than once")]
    DuplicateEndpoint {
        index: usize,
        component: String,
        port: String,
    },

    #[error("Connection {index} references missing port {component}.{port}")]
    DanglingEndpoint {
        index: usize,
        component: String,
        port: String,
    },
}

/// Check the referential invariants of a document, reporting the first problem.
pub fn validate_document(document: &Document) -> Result<(), ValidationError> {
    if document.components.contains_key(EXTERNAL_OWNER) {
        return Err(ValidationError::ReservedComponentName);
    }

    for name in document.external_ports.keys() {
        if document.components.contains_key(name) {
            return Err(ValidationError::NamespaceCollision { name: name.clone() });
        }
    }

    for (comp_name, comp) in &document.components {
        let mut seen = HashSet::new();
        for port in &comp.ports {
            if !seen.insert(port.name.as_str()) {
                return Err(ValidationError::DuplicatePort {
                    component: comp_name.clone(),
                    port: port.name.clone(),
                });
            }
        }
    }

    for (index, conn) in document.connections.iter().enumerate() {
        let mut seen = HashSet::new();
        for node in &conn.nodes {
            if !seen.insert(node) {
                return Err(ValidationError::DuplicateEndpoint {
                    index,
                    component: node.component.clone(),
                    port: node.port.clone(),
                });
            }
            if document.endpoint_coord(node).is_none() {
                return Err(ValidationError::DanglingEndpoint {
                    index,
                    component: node.component.clone(),
                    port: node.port.clone(),
                });
            }
        }
        if conn.nodes.len() < 2 {
            return Err(ValidationError::ShortConnection {
                index,
                count: conn.nodes.len(),
            });
        }
    }

    Ok(())
}
