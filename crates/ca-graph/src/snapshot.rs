//! Snapshot export/import against the persisted document.
//!
//! A snapshot is a deep copy; import installs the document as-is so that
//! `Graph::import_snapshot(g.export_snapshot()) == g`. Use [`Graph::repair`]
//! to clean up documents from untrusted sources.

use ca_document::{
    ComponentDef, ConnectionDef, Document, EndpointDef, ExternalPortDef, PortDef,
};

use crate::graph::{Component, Connection, Endpoint, ExternalPort, Graph, Owner, Port};

impl From<&EndpointDef> for Endpoint {
    fn from(def: &EndpointDef) -> Self {
        Endpoint::new(Owner::from_name(&def.component), def.port.clone())
    }
}

impl From<&Endpoint> for EndpointDef {
    fn from(endpoint: &Endpoint) -> Self {
        EndpointDef::new(endpoint.owner.as_str(), endpoint.port.clone())
    }
}

impl Graph {
    /// Deep copy of the graph in document form.
    pub fn export_snapshot(&self) -> Document {
        Document::from(self)
    }

    /// Build a graph from a document, replacing nothing else.
    pub fn import_snapshot(document: Document) -> Self {
        Graph::from(document)
    }
}

impl From<&Graph> for Document {
    fn from(graph: &Graph) -> Self {
        let components = graph
            .components
            .iter()
            .map(|(name, comp)| {
                let def = ComponentDef {
                    kind: comp.kind.clone(),
                    bbox: comp.bbox,
                    ports: comp
                        .ports
                        .iter()
                        .map(|p| PortDef {
                            name: p.name.clone(),
                            coord: p.coord,
                            kind: p.kind.clone(),
                        })
                        .collect(),
                };
                (name.clone(), def)
            })
            .collect();

        let external_ports = graph
            .external_ports
            .iter()
            .map(|(name, port)| {
                let def = ExternalPortDef {
                    kind: port.kind.clone(),
                    coord: port.coord,
                };
                (name.clone(), def)
            })
            .collect();

        let connections = graph
            .connections
            .iter()
            .map(|conn| ConnectionDef {
                nodes: conn.endpoints.iter().map(EndpointDef::from).collect(),
                points: conn.points.clone(),
            })
            .collect();

        Document {
            components,
            external_ports,
            connections,
        }
    }
}

impl From<Document> for Graph {
    fn from(document: Document) -> Self {
        let components = document
            .components
            .into_iter()
            .map(|(name, def)| {
                let comp = Component {
                    kind: def.kind,
                    bbox: def.bbox,
                    ports: def
                        .ports
                        .into_iter()
                        .map(|p| Port {
                            name: p.name,
                            kind: p.kind,
                            coord: p.coord,
                        })
                        .collect(),
                };
                (name, comp)
            })
            .collect();

        let external_ports = document
            .external_ports
            .into_iter()
            .map(|(name, def)| {
                let port = ExternalPort {
                    kind: def.kind,
                    coord: def.coord,
                };
                (name, port)
            })
            .collect();

        let connections = document
            .connections
            .into_iter()
            .map(|def| Connection {
                endpoints: def.nodes.iter().map(Endpoint::from).collect(),
                points: def.points,
            })
            .collect();

        Graph {
            components,
            external_ports,
            connections,
        }
    }
}
