//! Document schema definitions.

use ca_core::{BoundingBox, Pixel};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Owner name used by endpoints that refer to an external port.
pub const EXTERNAL_OWNER: &str = "external";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub components: IndexMap<String, ComponentDef>,
    #[serde(default)]
    pub external_ports: IndexMap<String, ExternalPortDef>,
    #[serde(default)]
    pub connections: Vec<ConnectionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "box")]
    pub bbox: BoundingBox,
    #[serde(default)]
    pub ports: Vec<PortDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortDef {
    pub name: String,
    pub coord: Pixel,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalPortDef {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub coord: Pixel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionDef {
    #[serde(default)]
    pub nodes: Vec<EndpointDef>,
    /// Reserved for hosts; any JSON value is carried through untouched.
    #[serde(default = "empty_points")]
    pub points: serde_json::Value,
}

/// `[]`, written for connections that carry no routing data.
pub fn empty_points() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EndpointDef {
    pub component: String,
    pub port: String,
}

impl EndpointDef {
    pub fn new(component: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            port: port.into(),
        }
    }

    pub fn is_external(&self) -> bool {
        self.component == EXTERNAL_OWNER
    }
}

impl Document {
    /// Coordinate of the port an endpoint names, if it exists.
    pub fn endpoint_coord(&self, endpoint: &EndpointDef) -> Option<Pixel> {
        if endpoint.is_external() {
            return self.external_ports.get(&endpoint.port).map(|p| p.coord);
        }
        self.components
            .get(&endpoint.component)?
            .ports
            .iter()
            .find(|p| p.name == endpoint.port)
            .map(|p| p.coord)
    }
}
