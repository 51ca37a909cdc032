//! Connection mutators: connect, merge, and branch removal.

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Connection, Endpoint, Graph};

impl Graph {
    fn check_resolves(&self, endpoint: &Endpoint) -> GraphResult<()> {
        if self.resolves(endpoint) {
            Ok(())
        } else {
            Err(GraphError::UnknownPort {
                owner: endpoint.owner.to_string(),
                port: endpoint.port.clone(),
            })
        }
    }

    /// Join two ports.
    ///
    /// - both already in the same connection: nothing to do
    /// - in two different connections: the connections are merged into one
    /// - only one is connected: the other joins that connection
    /// - neither is connected: a new two-endpoint connection is created
    ///
    /// Connecting a port to itself is a no-op.
    pub fn connect(&mut self, a: Endpoint, b: Endpoint) -> GraphResult<()> {
        self.check_resolves(&a)?;
        self.check_resolves(&b)?;
        if a == b {
            return Ok(());
        }

        match (self.connection_index_of(&a), self.connection_index_of(&b)) {
            (Some(ia), Some(ib)) if ia == ib => {}
            (Some(ia), Some(ib)) => {
                let kept = self.merge_connections(ia, ib);
                debug!(%a, %b, kept, "merged connections");
            }
            (Some(ia), None) => {
                self.connections[ia].insert(b);
            }
            (None, Some(ib)) => {
                self.connections[ib].insert(a);
            }
            (None, None) => {
                debug!(%a, %b, "new connection");
                self.connections.push(Connection::new(vec![a, b]));
            }
        }
        Ok(())
    }

    /// Add `endpoint` to an existing connection.
    ///
    /// If the endpoint already sits in a different connection, that whole
    /// connection is absorbed into `index` and removed from the list. The
    /// returned index replaces `index`: it is one lower when the absorbed
    /// connection came before it, and every later index shifts down too.
    pub fn merge_into_connection(
        &mut self,
        index: usize,
        endpoint: Endpoint,
    ) -> GraphResult<usize> {
        if index >= self.connections.len() {
            return Err(GraphError::UnknownConnection { index });
        }
        self.check_resolves(&endpoint)?;

        if self.connections[index].contains(&endpoint) {
            return Ok(index);
        }
        match self.connection_index_of(&endpoint) {
            Some(other) => Ok(self.merge_connections(index, other)),
            None => {
                debug!(%endpoint, index, "join connection");
                self.connections[index].insert(endpoint);
                Ok(index)
            }
        }
    }

    /// Remove one endpoint from a connection, or the whole connection when
    /// `endpoint` is `None`.
    ///
    /// A connection left with fewer than two endpoints is dropped. Returns
    /// `false` when there was nothing to remove.
    pub fn remove_endpoint_from_connection(
        &mut self,
        index: usize,
        endpoint: Option<&Endpoint>,
    ) -> bool {
        let Some(conn) = self.connections.get_mut(index) else {
            return false;
        };
        let Some(endpoint) = endpoint else {
            self.connections.remove(index);
            debug!(index, "delete connection");
            return true;
        };

        let before = conn.endpoints.len();
        conn.endpoints.retain(|e| e != endpoint);
        if conn.endpoints.len() == before {
            return false;
        }
        if conn.endpoints.len() < 2 {
            self.connections.remove(index);
            debug!(index, %endpoint, "delete branch and collapse connection");
        } else {
            debug!(index, %endpoint, "delete branch");
        }
        true
    }

    /// Fold connection `absorb` into `keep` and return `keep`'s new index.
    ///
    /// `keep`'s routing points win; the absorbed connection's are dropped.
    pub(crate) fn merge_connections(&mut self, keep: usize, absorb: usize) -> usize {
        let absorbed = self.connections.remove(absorb);
        let keep = if absorb < keep { keep - 1 } else { keep };
        let target = &mut self.connections[keep];
        for endpoint in absorbed.endpoints {
            target.insert(endpoint);
        }
        keep
    }
}
