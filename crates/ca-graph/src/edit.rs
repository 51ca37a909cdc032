//! Component and port mutators.
//!
//! Each mutator checks all of its preconditions before touching the graph,
//! so a rejected call leaves everything as it was. Renames rewrite every
//! matching connection endpoint in the same call.

use ca_core::{BoundingBox, Pixel};
use ca_document::EXTERNAL_OWNER;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Component, ExternalPort, Graph, Owner, Port};

impl Graph {
    /// Fail unless `name` can be given to a new component.
    fn check_component_name(&self, name: &str) -> GraphResult<()> {
        if name == EXTERNAL_OWNER {
            return Err(GraphError::ReservedName {
                name: name.to_string(),
            });
        }
        self.check_name_free(name)
    }

    fn check_name_free(&self, name: &str) -> GraphResult<()> {
        if self.name_in_use(name) {
            return Err(GraphError::NameConflict {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn component_mut(&mut self, name: &str) -> GraphResult<&mut Component> {
        self.components
            .get_mut(name)
            .ok_or_else(|| GraphError::UnknownComponent {
                name: name.to_string(),
            })
    }

    /// Add a component with an empty port list.
    pub fn add_component(
        &mut self,
        name: impl Into<String>,
        kind: impl Into<String>,
        bbox: BoundingBox,
    ) -> GraphResult<()> {
        let name = name.into();
        self.check_component_name(&name)?;
        debug!(component = %name, ?bbox, "add component");
        self.components.insert(
            name,
            Component {
                kind: kind.into(),
                bbox,
                ports: Vec::new(),
            },
        );
        Ok(())
    }

    /// Rename a component in place and repoint its connection endpoints.
    ///
    /// Renaming to the current name succeeds without doing anything.
    pub fn rename_component(&mut self, old_name: &str, new_name: &str) -> GraphResult<()> {
        if old_name == new_name {
            return Ok(());
        }
        let index = self
            .components
            .get_index_of(old_name)
            .ok_or_else(|| GraphError::UnknownComponent {
                name: old_name.to_string(),
            })?;
        self.check_component_name(new_name)?;

        let Some((_, comp)) = self.components.shift_remove_index(index) else {
            return Err(GraphError::UnknownComponent {
                name: old_name.to_string(),
            });
        };
        self.components.shift_insert(index, new_name.to_string(), comp);

        let old_owner = Owner::component(old_name);
        let mut rewritten = 0usize;
        for endpoint in self.connections.iter_mut().flat_map(|c| &mut c.endpoints) {
            if endpoint.owner == old_owner {
                endpoint.owner = Owner::component(new_name);
                rewritten += 1;
            }
        }
        debug!(from = old_name, to = new_name, rewritten, "rename component");
        Ok(())
    }

    /// Set a component's type label. Returns `false` if there is no such component.
    pub fn update_component_type(&mut self, name: &str, kind: impl Into<String>) -> bool {
        match self.components.get_mut(name) {
            Some(comp) => {
                comp.kind = kind.into();
                true
            }
            None => false,
        }
    }

    /// Remove a component, its ports, and every endpoint that referenced it.
    ///
    /// Returns `false` (and changes nothing) if the component does not exist.
    pub fn delete_component(&mut self, name: &str) -> bool {
        if self.components.shift_remove(name).is_none() {
            return false;
        }
        let owner = Owner::component(name);
        let pruned = self.prune_endpoints(|e| e.owner == owner);
        debug!(component = name, pruned, "delete component");
        true
    }

    /// Add a port to a component, or to the boundary for `Owner::External`.
    ///
    /// External port names share the namespace with component names; component
    /// port names only need to be unique within their component.
    pub fn add_port(
        &mut self,
        owner: &Owner,
        port_name: impl Into<String>,
        kind: impl Into<String>,
        coord: Pixel,
    ) -> GraphResult<()> {
        let port_name = port_name.into();
        match owner {
            Owner::External => {
                self.check_name_free(&port_name)?;
                self.external_ports.insert(
                    port_name.clone(),
                    ExternalPort {
                        kind: kind.into(),
                        coord,
                    },
                );
            }
            Owner::Component(comp_name) => {
                let comp = self.component_mut(comp_name)?;
                if comp.has_port(&port_name) {
                    return Err(GraphError::NameConflict { name: port_name });
                }
                comp.ports.push(Port {
                    name: port_name.clone(),
                    kind: kind.into(),
                    coord,
                });
            }
        }
        debug!(%owner, port = %port_name, %coord, "add port");
        Ok(())
    }

    /// Rename a port within its owner and repoint matching endpoints.
    pub fn rename_port(
        &mut self,
        owner: &Owner,
        old_name: &str,
        new_name: &str,
    ) -> GraphResult<()> {
        if old_name == new_name {
            return Ok(());
        }
        let unknown = || GraphError::UnknownPort {
            owner: owner.to_string(),
            port: old_name.to_string(),
        };
        match owner {
            Owner::External => {
                let index = self
                    .external_ports
                    .get_index_of(old_name)
                    .ok_or_else(unknown)?;
                self.check_name_free(new_name)?;
                let Some((_, port)) = self.external_ports.shift_remove_index(index) else {
                    return Err(unknown());
                };
                self.external_ports
                    .shift_insert(index, new_name.to_string(), port);
            }
            Owner::Component(comp_name) => {
                let comp = self.component_mut(comp_name)?;
                if comp.has_port(new_name) {
                    return Err(GraphError::NameConflict {
                        name: new_name.to_string(),
                    });
                }
                let port = comp
                    .ports
                    .iter_mut()
                    .find(|p| p.name == old_name)
                    .ok_or_else(unknown)?;
                port.name = new_name.to_string();
            }
        }

        let mut rewritten = 0usize;
        for endpoint in self.connections.iter_mut().flat_map(|c| &mut c.endpoints) {
            if endpoint.matches(owner, old_name) {
                endpoint.port = new_name.to_string();
                rewritten += 1;
            }
        }
        debug!(%owner, from = old_name, to = new_name, rewritten, "rename port");
        Ok(())
    }

    /// Remove a port and every endpoint that referenced it.
    ///
    /// Returns `false` if the port does not exist.
    pub fn delete_port(&mut self, owner: &Owner, port_name: &str) -> bool {
        let removed = match owner {
            Owner::External => self.external_ports.shift_remove(port_name).is_some(),
            Owner::Component(comp_name) => match self.components.get_mut(comp_name) {
                Some(comp) => {
                    let before = comp.ports.len();
                    comp.ports.retain(|p| p.name != port_name);
                    comp.ports.len() != before
                }
                None => false,
            },
        };
        if !removed {
            return false;
        }
        let pruned = self.prune_endpoints(|e| e.matches(owner, port_name));
        debug!(%owner, port = port_name, pruned, "delete port");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Endpoint;

    fn bbox(a: [i32; 4]) -> BoundingBox {
        BoundingBox::from_array(a)
    }

    #[test]
    fn add_component_rejects_taken_names() {
        let mut g = Graph::new();
        g.add_component("R1", "res", bbox([0, 0, 10, 10])).unwrap();
        g.add_port(&Owner::External, "VIN", "in", Pixel::new(0, 0))
            .unwrap();

        assert_eq!(
            g.add_component("R1", "res", bbox([0, 0, 1, 1])),
            Err(GraphError::NameConflict { name: "R1".into() })
        );
        assert_eq!(
            g.add_component("VIN", "res", bbox([0, 0, 1, 1])),
            Err(GraphError::NameConflict { name: "VIN".into() })
        );
        assert_eq!(
            g.add_component("external", "res", bbox([0, 0, 1, 1])),
            Err(GraphError::ReservedName {
                name: "external".into()
            })
        );
        assert_eq!(g.components().len(), 1);
    }

    #[test]
    fn external_port_cannot_shadow_component() {
        let mut g = Graph::new();
        g.add_component("U1", "ic", bbox([0, 0, 10, 10])).unwrap();
        assert_eq!(
            g.add_port(&Owner::External, "U1", "", Pixel::new(0, 0)),
            Err(GraphError::NameConflict { name: "U1".into() })
        );
    }

    #[test]
    fn add_port_to_missing_component() {
        let mut g = Graph::new();
        assert_eq!(
            g.add_port(&Owner::component("nope"), "1", "", Pixel::new(0, 0)),
            Err(GraphError::UnknownComponent {
                name: "nope".into()
            })
        );
    }

    #[test]
    fn rename_component_keeps_position_and_rewrites_endpoints() {
        let mut g = Graph::new();
        g.add_component("A", "", bbox([0, 0, 10, 10])).unwrap();
        g.add_component("B", "", bbox([20, 0, 30, 10])).unwrap();
        g.add_port(&Owner::component("A"), "1", "", Pixel::new(0, 5))
            .unwrap();
        g.add_port(&Owner::component("B"), "1", "", Pixel::new(20, 5))
            .unwrap();
        g.connect(Endpoint::on("A", "1"), Endpoint::on("B", "1"))
            .unwrap();

        g.rename_component("A", "A2").unwrap();

        let names: Vec<_> = g.components().keys().cloned().collect();
        assert_eq!(names, ["A2", "B"]);
        assert!(g.connections()[0].contains(&Endpoint::on("A2", "1")));
        assert!(!g.connections()[0].contains(&Endpoint::on("A", "1")));
    }

    #[test]
    fn rename_component_to_same_name_is_noop() {
        let mut g = Graph::new();
        g.add_component("A", "", bbox([0, 0, 10, 10])).unwrap();
        let before = g.clone();
        g.rename_component("A", "A").unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn rejected_rename_changes_nothing() {
        let mut g = Graph::new();
        g.add_component("A", "", bbox([0, 0, 10, 10])).unwrap();
        g.add_component("B", "", bbox([0, 0, 10, 10])).unwrap();
        let before = g.clone();
        assert!(g.rename_component("A", "B").is_err());
        assert!(g.rename_component("A", "external").is_err());
        assert!(g.rename_component("missing", "C").is_err());
        assert_eq!(g, before);
    }

    #[test]
    fn update_type_is_silent_for_missing_component() {
        let mut g = Graph::new();
        assert!(!g.update_component_type("ghost", "cap"));
        g.add_component("C1", "", bbox([0, 0, 10, 10])).unwrap();
        assert!(g.update_component_type("C1", "cap"));
        assert_eq!(g.component("C1").unwrap().kind, "cap");
    }

    #[test]
    fn rename_external_port_checks_component_namespace() {
        let mut g = Graph::new();
        g.add_component("R1", "", bbox([0, 0, 10, 10])).unwrap();
        g.add_port(&Owner::External, "IN", "", Pixel::new(0, 0))
            .unwrap();
        assert_eq!(
            g.rename_port(&Owner::External, "IN", "R1"),
            Err(GraphError::NameConflict { name: "R1".into() })
        );
        g.rename_port(&Owner::External, "IN", "VIN").unwrap();
        assert!(g.external_port("VIN").is_some());
        assert!(g.external_port("IN").is_none());
    }

    #[test]
    fn rename_component_port_conflicts_within_owner_only() {
        let mut g = Graph::new();
        g.add_component("A", "", bbox([0, 0, 10, 10])).unwrap();
        g.add_component("B", "", bbox([0, 0, 10, 10])).unwrap();
        let a = Owner::component("A");
        g.add_port(&a, "1", "", Pixel::new(0, 0)).unwrap();
        g.add_port(&a, "2", "", Pixel::new(0, 1)).unwrap();
        g.add_port(&Owner::component("B"), "3", "", Pixel::new(0, 2))
            .unwrap();

        assert!(g.rename_port(&a, "1", "2").is_err());
        g.rename_port(&a, "1", "3").unwrap();
        assert!(g.component("A").unwrap().has_port("3"));
        assert_eq!(
            g.rename_port(&a, "missing", "4"),
            Err(GraphError::UnknownPort {
                owner: "A".into(),
                port: "missing".into()
            })
        );
    }

    #[test]
    fn delete_missing_things_is_noop() {
        let mut g = Graph::new();
        g.add_component("A", "", bbox([0, 0, 10, 10])).unwrap();
        let before = g.clone();
        assert!(!g.delete_component("B"));
        assert!(!g.delete_port(&Owner::component("A"), "x"));
        assert!(!g.delete_port(&Owner::component("B"), "x"));
        assert!(!g.delete_port(&Owner::External, "x"));
        assert_eq!(g, before);
    }
}
