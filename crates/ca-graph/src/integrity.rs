//! Referential cleanup of connection endpoints.

use std::collections::HashSet;

use tracing::warn;

use crate::graph::{Endpoint, Graph};

impl Graph {
    /// Strip endpoints matching `doomed`, then drop connections left with
    /// fewer than two endpoints. Returns how many endpoints were removed.
    pub(crate) fn prune_endpoints<F>(&mut self, doomed: F) -> usize
    where
        F: Fn(&Endpoint) -> bool,
    {
        let mut removed = 0;
        for conn in &mut self.connections {
            let before = conn.endpoints.len();
            conn.endpoints.retain(|e| !doomed(e));
            removed += before - conn.endpoints.len();
        }
        self.connections.retain(|c| c.len() >= 2);
        removed
    }

    /// Bring an imported graph back in line with the endpoint invariants.
    ///
    /// Drops endpoints that do not resolve to a port, repeated endpoints
    /// within a connection, and connections left with fewer than two
    /// endpoints. Returns how many endpoints were dropped.
    pub fn repair(&mut self) -> usize {
        let mut dropped = 0;
        let mut connections = std::mem::take(&mut self.connections);
        for (index, conn) in connections.iter_mut().enumerate() {
            let mut seen = HashSet::new();
            let before = conn.endpoints.len();
            conn.endpoints.retain(|e| {
                if !self.resolves(e) {
                    warn!(index, endpoint = %e, "dropping dangling endpoint");
                    return false;
                }
                seen.insert(e.clone())
            });
            dropped += before - conn.endpoints.len();
        }
        let before = connections.len();
        connections.retain(|c| c.len() >= 2);
        if connections.len() != before {
            warn!(
                removed = before - connections.len(),
                "dropping connections with fewer than two endpoints"
            );
        }
        self.connections = connections;
        dropped
    }
}
