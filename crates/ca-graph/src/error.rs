//! Graph-specific error types.
//!
//! Every variant is recoverable: the graph is left untouched when one is
//! returned, and the `Display` text is meant to be shown to the user.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The name is already taken by a component or external port
    /// (or, for component ports, by a sibling port).
    #[error("Name '{name}' already exists")]
    NameConflict { name: String },

    /// `external` is the pseudo-owner of boundary ports.
    #[error("Name '{name}' is reserved")]
    ReservedName { name: String },

    #[error("Component '{name}' not found")]
    UnknownComponent { name: String },

    #[error("Port {owner}.{port} not found")]
    UnknownPort { owner: String, port: String },

    #[error("Connection {index} not found")]
    UnknownConnection { index: usize },
}
