//! Scripted edit batches.
//!
//! A script is a YAML (or JSON) list of operations, one per graph mutator:
//!
//! ```yaml
//! - op: add_component
//!   name: R1
//!   type: resistor
//!   box: [10, 10, 60, 30]
//! - op: add_port
//!   owner: R1
//!   name: "1"
//!   coord: [10, 20]
//! - op: connect
//!   a: { component: external, port: VIN }
//!   b: { component: R1, port: "1" }
//! ```
//!
//! Ops run in order; a rejected op is reported and the batch carries on.

use std::path::Path;

use ca_core::{BoundingBox, Pixel};
use ca_document::EndpointDef;
use ca_graph::{Endpoint, Graph, Owner};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    AddComponent {
        name: String,
        #[serde(rename = "type", default)]
        kind: String,
        #[serde(rename = "box")]
        bbox: BoundingBox,
    },
    RenameComponent {
        from: String,
        to: String,
    },
    SetComponentType {
        name: String,
        #[serde(rename = "type")]
        kind: String,
    },
    DeleteComponent {
        name: String,
    },
    AddPort {
        owner: String,
        name: String,
        #[serde(rename = "type", default)]
        kind: String,
        coord: Pixel,
    },
    RenamePort {
        owner: String,
        from: String,
        to: String,
    },
    DeletePort {
        owner: String,
        name: String,
    },
    Connect {
        a: EndpointDef,
        b: EndpointDef,
    },
    MergeIntoConnection {
        index: usize,
        endpoint: EndpointDef,
    },
    /// Without `endpoint` the whole connection goes.
    RemoveEndpoint {
        index: usize,
        #[serde(default)]
        endpoint: Option<EndpointDef>,
    },
}

/// What happened to one op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpOutcome {
    Applied,
    /// Valid, but there was nothing to change.
    NoOp,
    Rejected { reason: String },
}

impl OpOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            OpOutcome::Applied
        } else {
            OpOutcome::NoOp
        }
    }
}

/// Load a script; `.json` files are read as JSON, everything else as YAML.
pub fn load_script(path: &Path) -> AppResult<Vec<EditOp>> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let ops = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(ops)
}

/// Apply one op to the graph.
pub fn apply_op(graph: &mut Graph, op: &EditOp) -> OpOutcome {
    let result = match op {
        EditOp::AddComponent { name, kind, bbox } => {
            graph.add_component(name.as_str(), kind.as_str(), *bbox).map(|_| true)
        }
        EditOp::RenameComponent { from, to } => {
            graph.rename_component(from, to).map(|_| from != to)
        }
        EditOp::SetComponentType { name, kind } => {
            Ok(graph.update_component_type(name, kind.as_str()))
        }
        EditOp::DeleteComponent { name } => Ok(graph.delete_component(name)),
        EditOp::AddPort {
            owner,
            name,
            kind,
            coord,
        } => graph
            .add_port(&Owner::from_name(owner), name.as_str(), kind.as_str(), *coord)
            .map(|_| true),
        EditOp::RenamePort { owner, from, to } => graph
            .rename_port(&Owner::from_name(owner), from, to)
            .map(|_| from != to),
        EditOp::DeletePort { owner, name } => Ok(graph.delete_port(&Owner::from_name(owner), name)),
        EditOp::Connect { a, b } => {
            let before = graph.connections().to_vec();
            graph
                .connect(Endpoint::from(a), Endpoint::from(b))
                .map(|_| graph.connections() != before.as_slice())
        }
        EditOp::MergeIntoConnection { index, endpoint } => {
            let before = graph.connections().to_vec();
            graph
                .merge_into_connection(*index, Endpoint::from(endpoint))
                .map(|_| graph.connections() != before.as_slice())
        }
        EditOp::RemoveEndpoint { index, endpoint } => {
            let endpoint = endpoint.as_ref().map(Endpoint::from);
            Ok(graph.remove_endpoint_from_connection(*index, endpoint.as_ref()))
        }
    };

    match result {
        Ok(changed) => OpOutcome::from_changed(changed),
        Err(e) => OpOutcome::Rejected {
            reason: e.to_string(),
        },
    }
}

/// Apply every op in order, collecting one outcome per op.
pub fn apply_script(graph: &mut Graph, ops: &[EditOp]) -> Vec<OpOutcome> {
    ops.iter()
        .enumerate()
        .map(|(i, op)| {
            let outcome = apply_op(graph, op);
            match &outcome {
                OpOutcome::Rejected { reason } => warn!(step = i, %reason, "op rejected"),
                _ => debug!(step = i, ?outcome, "op done"),
            }
            outcome
        })
        .collect()
}
