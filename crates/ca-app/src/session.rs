//! One annotation session: a graph plus the gesture rules hosts share.
//!
//! In-progress gestures (a box being dragged, the first port of a connect)
//! stay with the host; only completed gestures reach the session.

use ca_core::{BoundingBox, Pixel};
use ca_document::Document;
use ca_geometry::{Hit, HitRadii, HitTester};
use ca_graph::{Graph, Owner};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub radii: HitRadii,
    /// Dragged boxes no wider than this are treated as stray clicks.
    pub min_box_extent: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            radii: HitRadii::default(),
            min_box_extent: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    graph: Graph,
    config: SessionConfig,
}

impl Session {
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, SessionConfig::default())
    }

    pub fn with_config(graph: Graph, config: SessionConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// The element under a click, if any.
    pub fn select(&self, x: f64, y: f64) -> Option<Hit> {
        HitTester::with_radii(&self.graph, self.config.radii).hit_test(x, y)
    }

    /// Commit a finished drag as a new component.
    ///
    /// Returns `Ok(false)` when the box is too narrow to be intentional.
    pub fn draw_component(
        &mut self,
        start: Pixel,
        end: Pixel,
        name: &str,
        kind: &str,
    ) -> AppResult<bool> {
        let bbox = BoundingBox::from_corners(start, end);
        if bbox.width() <= self.config.min_box_extent {
            debug!(?bbox, "discarding narrow box");
            return Ok(false);
        }
        self.graph.add_component(name, kind, bbox)?;
        Ok(true)
    }

    /// Place a port at a click. A click on a component attaches the port to
    /// it; anywhere else makes an external port. Returns the chosen owner.
    pub fn place_port(&mut self, x: f64, y: f64, name: &str, kind: &str) -> AppResult<Owner> {
        let owner = match self.select(x, y) {
            Some(Hit::Component { name: component }) => Owner::Component(component),
            _ => Owner::External,
        };
        self.graph
            .add_port(&owner, name, kind, Pixel::truncate(x, y))?;
        Ok(owner)
    }

    /// Finish a connect gesture that started on `start` and ended on `target`.
    ///
    /// Port to port connects the two; port to a connection centre or branch
    /// joins that connection. Anything else is ignored and returns `Ok(false)`.
    pub fn connect_to(&mut self, start: &Hit, target: &Hit) -> AppResult<bool> {
        let Hit::Port(from) = start else {
            return Ok(false);
        };
        match target {
            Hit::Port(to) if to != from => {
                self.graph.connect(from.clone(), to.clone())?;
                Ok(true)
            }
            Hit::ConnectionCenter { index } | Hit::ConnectionEdge { index, .. } => {
                self.graph.merge_into_connection(*index, from.clone())?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Delete whatever a hit points at. A branch hit removes only that
    /// endpoint; a centre hit removes the whole connection.
    pub fn delete(&mut self, hit: &Hit) -> bool {
        match hit {
            Hit::Component { name } => self.graph.delete_component(name),
            Hit::Port(endpoint) => self.graph.delete_port(&endpoint.owner, &endpoint.port),
            Hit::ConnectionCenter { index } => {
                self.graph.remove_endpoint_from_connection(*index, None)
            }
            Hit::ConnectionEdge { index, endpoint } => self
                .graph
                .remove_endpoint_from_connection(*index, Some(endpoint)),
        }
    }

    /// Capture the graph, e.g. before an edit the host wants to undo.
    pub fn snapshot(&self) -> Document {
        self.graph.export_snapshot()
    }

    pub fn restore(&mut self, snapshot: Document) {
        self.graph = Graph::import_snapshot(snapshot);
    }
}
