//! Document loading, saving, validation, and introspection.

use std::path::Path;

use ca_document::{from_json_str, to_json_pretty, validate_document};
use ca_geometry::HitRadii;
use ca_graph::Graph;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Counts shown when listing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub component_count: usize,
    pub port_count: usize,
    pub external_port_count: usize,
    pub connection_count: usize,
    pub endpoint_count: usize,
}

fn read(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a graph from a JSON annotation document.
///
/// The document is installed as-is; no graph is produced if it fails to parse.
pub fn load_graph(path: &Path) -> AppResult<Graph> {
    let content = read(path)?;
    let document = from_json_str(&content)?;
    let graph = Graph::import_snapshot(document);
    info!(path = %path.display(), components = graph.components().len(), "loaded document");
    Ok(graph)
}

/// Save a graph as a pretty-printed JSON annotation document.
pub fn save_graph(path: &Path, graph: &Graph) -> AppResult<()> {
    let content = to_json_pretty(&graph.export_snapshot())?;
    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "saved document");
    Ok(())
}

/// Check namespace and endpoint invariants of a graph.
pub fn validate_graph(graph: &Graph) -> AppResult<()> {
    validate_document(&graph.export_snapshot())?;
    Ok(())
}

/// Load hit radii overrides from a YAML file.
pub fn load_radii(path: &Path) -> AppResult<HitRadii> {
    let content = read(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

pub fn summarize(graph: &Graph) -> GraphSummary {
    GraphSummary {
        component_count: graph.components().len(),
        port_count: graph.component_port_count(),
        external_port_count: graph.external_ports().len(),
        connection_count: graph.connections().len(),
        endpoint_count: graph.connections().iter().map(|c| c.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ca_core::{BoundingBox, Pixel};
    use ca_graph::{Endpoint, Owner};

    #[test]
    fn summary_counts() {
        let mut g = Graph::new();
        g.add_component("R1", "", BoundingBox::from_array([0, 0, 10, 10]))
            .unwrap();
        g.add_port(&Owner::component("R1"), "1", "", Pixel::new(0, 5))
            .unwrap();
        g.add_port(&Owner::component("R1"), "2", "", Pixel::new(10, 5))
            .unwrap();
        g.add_port(&Owner::External, "IN", "", Pixel::new(-5, 5))
            .unwrap();
        g.connect(Endpoint::external("IN"), Endpoint::on("R1", "1"))
            .unwrap();

        assert_eq!(
            summarize(&g),
            GraphSummary {
                component_count: 1,
                port_count: 2,
                external_port_count: 1,
                connection_count: 1,
                endpoint_count: 2,
            }
        );
        assert!(validate_graph(&g).is_ok());
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/definitely/not/here.json");
        let err = load_graph(path).unwrap_err();
        assert!(matches!(err, AppError::FileRead { .. }));
        assert!(err.to_string().contains("here.json"));
    }
}
