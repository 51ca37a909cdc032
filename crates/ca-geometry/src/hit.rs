//! Prioritized hit testing.
//!
//! Candidates are checked in a fixed order and the first match wins:
//!
//! 1. connection centres
//! 2. external ports
//! 3. component ports
//! 4. connection branches (endpoint to centre segments)
//! 5. component boxes, smallest area first
//!
//! Radius checks are strict (`distance < radius`), box containment is
//! inclusive. The order lets ports and branches be picked even when they sit
//! inside a large component, and lets small components win over the boxes
//! that enclose them.

use core::fmt;

use ca_core::{Point, distance, point_to_segment_distance};
use ca_graph::{Endpoint, Graph};
use tracing::trace;

use crate::radii::HitRadii;

/// The single graph element under a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// The shared node of a whole connection.
    ConnectionCenter { index: usize },
    /// A component-owned or external port.
    Port(Endpoint),
    /// One branch of a connection, identified by its endpoint.
    ConnectionEdge { index: usize, endpoint: Endpoint },
    Component { name: String },
}

impl Hit {
    /// Connection index for centre and branch hits.
    pub fn connection_index(&self) -> Option<usize> {
        match self {
            Hit::ConnectionCenter { index } | Hit::ConnectionEdge { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hit::ConnectionCenter { index } => write!(f, "connection {index} (centre)"),
            Hit::Port(endpoint) => write!(f, "port {endpoint}"),
            Hit::ConnectionEdge { index, endpoint } => {
                write!(f, "connection {index} (branch to {endpoint})")
            }
            Hit::Component { name } => write!(f, "component {name}"),
        }
    }
}

/// Hit test with the default radii.
pub fn hit_test(graph: &Graph, x: f64, y: f64) -> Option<Hit> {
    HitTester::new(graph).hit_test(x, y)
}

/// Read-only view of a graph that resolves clicks to elements.
#[derive(Debug, Clone, Copy)]
pub struct HitTester<'g> {
    graph: &'g Graph,
    radii: HitRadii,
}

impl<'g> HitTester<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_radii(graph, HitRadii::default())
    }

    pub fn with_radii(graph: &'g Graph, radii: HitRadii) -> Self {
        Self { graph, radii }
    }

    pub fn radii(&self) -> HitRadii {
        self.radii
    }

    pub fn hit_test(&self, x: f64, y: f64) -> Option<Hit> {
        let p = Point::new(x, y);
        // Centroids feed both the centre and branch passes.
        let centroids: Vec<Option<Point>> = (0..self.graph.connections().len())
            .map(|i| self.graph.connection_centroid(i))
            .collect();

        let hit = self
            .connection_center(p, &centroids)
            .or_else(|| self.external_port(p))
            .or_else(|| self.component_port(p))
            .or_else(|| self.connection_branch(p, &centroids))
            .or_else(|| self.component(p));
        trace!(x, y, hit = ?hit, "hit test");
        hit
    }

    fn connection_center(&self, p: Point, centroids: &[Option<Point>]) -> Option<Hit> {
        centroids.iter().enumerate().find_map(|(index, c)| {
            let c = (*c)?;
            (distance(p, c) < self.radii.connection_center)
                .then_some(Hit::ConnectionCenter { index })
        })
    }

    fn external_port(&self, p: Point) -> Option<Hit> {
        self.graph
            .external_ports()
            .iter()
            .find(|(_, port)| distance(p, port.coord.to_point()) < self.radii.external_port)
            .map(|(name, _)| Hit::Port(Endpoint::external(name.clone())))
    }

    fn component_port(&self, p: Point) -> Option<Hit> {
        self.graph.components().iter().find_map(|(comp_name, comp)| {
            comp.ports
                .iter()
                .find(|port| distance(p, port.coord.to_point()) < self.radii.component_port)
                .map(|port| Hit::Port(Endpoint::on(comp_name.clone(), port.name.clone())))
        })
    }

    fn connection_branch(&self, p: Point, centroids: &[Option<Point>]) -> Option<Hit> {
        self.graph
            .connections()
            .iter()
            .zip(centroids)
            .enumerate()
            .find_map(|(index, (conn, centroid))| {
                let centroid = (*centroid)?;
                conn.endpoints.iter().find_map(|endpoint| {
                    let start = self.graph.endpoint_coordinate(endpoint)?.to_point();
                    (point_to_segment_distance(p, start, centroid) < self.radii.connection_branch)
                        .then(|| Hit::ConnectionEdge {
                            index,
                            endpoint: endpoint.clone(),
                        })
                })
            })
    }

    fn component(&self, p: Point) -> Option<Hit> {
        self.graph
            .components_by_area()
            .into_iter()
            .find(|(_, comp)| comp.bbox.contains(p))
            .map(|(name, _)| Hit::Component {
                name: name.to_string(),
            })
    }
}
