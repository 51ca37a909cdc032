//! Core graph data structures.

use core::fmt;

use ca_core::{BoundingBox, Pixel, Point};
use ca_document::{EXTERNAL_OWNER, empty_points};
use indexmap::IndexMap;

/// Who owns a port: a named component or the image boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    Component(String),
    External,
}

impl Owner {
    pub fn component(name: impl Into<String>) -> Self {
        Owner::Component(name.into())
    }

    /// Map a document owner name onto an owner; `"external"` is the boundary.
    pub fn from_name(name: &str) -> Self {
        if name == EXTERNAL_OWNER {
            Owner::External
        } else {
            Owner::Component(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Owner::Component(name) => name,
            Owner::External => EXTERNAL_OWNER,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Owner::External)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One participant of a connection, referenced weakly by name.
///
/// Endpoints are resolved against the graph on every access; they never hold
/// onto the port itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub owner: Owner,
    pub port: String,
}

impl Endpoint {
    pub fn new(owner: Owner, port: impl Into<String>) -> Self {
        Self {
            owner,
            port: port.into(),
        }
    }

    pub fn external(port: impl Into<String>) -> Self {
        Self::new(Owner::External, port)
    }

    pub fn on(component: impl Into<String>, port: impl Into<String>) -> Self {
        Self::new(Owner::component(component), port)
    }

    pub fn matches(&self, owner: &Owner, port: &str) -> bool {
        &self.owner == owner && self.port == port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.port)
    }
}

/// A port owned by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub name: String,
    /// Free-text label; may be empty.
    pub kind: String,
    pub coord: Pixel,
}

/// A rectangular annotated part of the diagram.
///
/// The name lives in the graph's component map, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: String,
    pub bbox: BoundingBox,
    pub ports: Vec<Port>,
}

impl Component {
    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }

    pub fn has_port(&self, name: &str) -> bool {
        self.port(name).is_some()
    }
}

/// A port on the image boundary, not owned by any component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPort {
    pub kind: String,
    pub coord: Pixel,
}

/// A hyperedge: every endpoint is joined at one shared node.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub endpoints: Vec<Endpoint>,
    /// Host-reserved routing data, carried through untouched.
    pub points: serde_json::Value,
}

impl Connection {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints,
            points: empty_points(),
        }
    }

    pub fn contains(&self, endpoint: &Endpoint) -> bool {
        self.endpoints.contains(endpoint)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Append unless already present. Returns whether it was added.
    pub(crate) fn insert(&mut self, endpoint: Endpoint) -> bool {
        if self.contains(&endpoint) {
            return false;
        }
        self.endpoints.push(endpoint);
        true
    }
}

/// The annotation graph for one session.
///
/// Component and external port names share one namespace. Maps keep
/// insertion order so documents round-trip unchanged and hit testing visits
/// ports in a stable order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub(crate) components: IndexMap<String, Component>,
    pub(crate) external_ports: IndexMap<String, ExternalPort>,
    pub(crate) connections: Vec<Connection>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn components(&self) -> &IndexMap<String, Component> {
        &self.components
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn external_ports(&self) -> &IndexMap<String, ExternalPort> {
        &self.external_ports
    }

    pub fn external_port(&self, name: &str) -> Option<&ExternalPort> {
        self.external_ports.get(name)
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection(&self, index: usize) -> Option<&Connection> {
        self.connections.get(index)
    }

    /// Whether a name is taken in the shared component/external namespace.
    pub fn name_in_use(&self, name: &str) -> bool {
        self.components.contains_key(name) || self.external_ports.contains_key(name)
    }

    /// Index of the first connection containing `endpoint`.
    pub fn connection_index_of(&self, endpoint: &Endpoint) -> Option<usize> {
        self.connections.iter().position(|c| c.contains(endpoint))
    }

    /// Coordinate of a port, routing `Owner::External` to the boundary ports.
    pub fn port_coordinate(&self, owner: &Owner, port: &str) -> Option<Pixel> {
        match owner {
            Owner::External => self.external_ports.get(port).map(|p| p.coord),
            Owner::Component(name) => self.components.get(name)?.port(port).map(|p| p.coord),
        }
    }

    pub fn endpoint_coordinate(&self, endpoint: &Endpoint) -> Option<Pixel> {
        self.port_coordinate(&endpoint.owner, &endpoint.port)
    }

    pub fn resolves(&self, endpoint: &Endpoint) -> bool {
        self.endpoint_coordinate(endpoint).is_some()
    }

    /// Mean position of the connection's endpoints that currently resolve.
    ///
    /// Stale endpoints contribute nothing; `None` when none resolve or the
    /// index is out of range.
    pub fn connection_centroid(&self, index: usize) -> Option<Point> {
        let conn = self.connections.get(index)?;
        Point::mean(
            conn.endpoints
                .iter()
                .filter_map(|e| self.endpoint_coordinate(e)),
        )
    }

    /// Components ordered by ascending box area, smallest first.
    ///
    /// The sort is stable, so equal areas keep insertion order.
    pub fn components_by_area(&self) -> Vec<(&str, &Component)> {
        let mut sorted: Vec<(&str, &Component)> = self
            .components
            .iter()
            .map(|(name, comp)| (name.as_str(), comp))
            .collect();
        sorted.sort_by_key(|(_, comp)| comp.bbox.area());
        sorted
    }

    /// Number of component-owned ports.
    pub fn component_port_count(&self) -> usize {
        self.components.values().map(|c| c.ports.len()).sum()
    }
}
