//! Shared application service layer for circuit annotation hosts.
//!
//! Hosts (an upload form, a session relay, the CLI) go through this crate
//! rather than poking at the graph directly: it loads and saves documents,
//! turns pointer gestures into graph edits, and replays scripted edits.

pub mod document_service;
pub mod error;
pub mod script;
pub mod session;

// Re-export key types for convenience
pub use document_service::{
    GraphSummary, load_graph, load_radii, save_graph, summarize, validate_graph,
};
pub use error::{AppError, AppResult};
pub use script::{EditOp, OpOutcome, apply_op, apply_script, load_script};
pub use session::{Session, SessionConfig};
