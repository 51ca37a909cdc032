//! ca-graph: the annotation graph store.
//!
//! Provides:
//! - The owned graph aggregate (components, external ports, connections)
//! - Invariant-preserving mutators with cascading endpoint cleanup
//! - Port/centroid lookups and area ordering used by hit testing
//! - Snapshot export/import against the persisted document
//!
//! # Example
//!
//! ```
//! use ca_core::{BoundingBox, Pixel};
//! use ca_graph::{Endpoint, Graph, Owner};
//!
//! let mut graph = Graph::new();
//! graph.add_component("R1", "resistor", BoundingBox::from_array([0, 0, 40, 20])).unwrap();
//! graph.add_port(&Owner::component("R1"), "1", "", Pixel::new(0, 10)).unwrap();
//! graph.add_port(&Owner::External, "VIN", "input", Pixel::new(-20, 10)).unwrap();
//! graph
//!     .connect(Endpoint::new(Owner::component("R1"), "1"), Endpoint::external("VIN"))
//!     .unwrap();
//!
//! assert_eq!(graph.connections().len(), 1);
//! graph.delete_port(&Owner::External, "VIN");
//! assert!(graph.connections().is_empty());
//! ```

mod connect;
mod edit;
pub mod error;
pub mod graph;
mod integrity;
pub mod snapshot;

pub use error::{GraphError, GraphResult};
pub use graph::{Component, Connection, Endpoint, ExternalPort, Graph, Owner, Port};
