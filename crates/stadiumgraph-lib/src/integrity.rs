//! Integrity checks and repair for the adjacency store.
//!
//! Graphs built through [`Graph::add_edge`] are always well formed. Raw
//! imports ([`Graph::from_raw_adjacency`]) bypass normalization and can carry
//! blank names or one-sided edges; these helpers detect and prune them.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::graph::Graph;
use crate::name::is_blank;

/// Summary of structural problems found in a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    /// Stadiums whose stored name is empty or whitespace.
    pub blank_nodes: usize,
    /// Neighbour entries that point at a blank name.
    pub blank_neighbours: usize,
    /// Edges stored in one direction only, or with differing weights.
    pub asymmetric_edges: usize,
}

impl IntegrityReport {
    /// Whether no blank names were found. Asymmetry is reported but does not
    /// make a graph invalid.
    pub fn is_valid(&self) -> bool {
        self.blank_nodes == 0 && self.blank_neighbours == 0
    }
}

impl Graph {
    /// `true` when no blank stadium name appears as a node or neighbour.
    pub fn validate(&self) -> bool {
        self.integrity_report().is_valid()
    }

    /// Inspect every node and edge and count structural problems.
    pub fn integrity_report(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();
        for id in self.node_ids() {
            let name = self.name(id).unwrap_or_default();
            if is_blank(name) {
                error!(hex = %hex::encode(name), "blank stadium name in graph");
                report.blank_nodes += 1;
            }
            for (target, distance) in self.edges_from(id) {
                let target_name = self.name(target).unwrap_or_default();
                if is_blank(target_name) {
                    error!(
                        stadium = %name,
                        hex = %hex::encode(target_name),
                        "blank neighbour entry"
                    );
                    report.blank_neighbours += 1;
                }
                if self.edge_weight(target, id) != Some(distance) {
                    warn!(from = %name, to = %target_name, distance, "edge is not symmetric");
                    report.asymmetric_edges += 1;
                }
            }
        }
        report
    }

    /// Remove blank stadiums and every neighbour entry pointing at one.
    ///
    /// Returns the number of removed entries.
    pub fn cleanup(&mut self) -> usize {
        let removed = self.retain_nodes(|name| !is_blank(name));
        if removed > 0 {
            info!(removed, "removed malformed adjacency entries");
        }
        removed
    }

    /// Whether every stadium can reach every other one. An empty graph counts
    /// as connected.
    pub fn is_connected(&self) -> bool {
        let node_count = self.node_count();
        if node_count == 0 {
            return true;
        }

        let mut visited = vec![false; node_count];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut reached = 1;

        while let Some(current) = queue.pop_front() {
            for (next, _) in self.edges_from(current) {
                if next < node_count && !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }

        if reached == node_count {
            return true;
        }
        for id in self.node_ids().filter(|&id| !visited[id]) {
            debug!(stadium = self.name(id).unwrap_or_default(), "unreachable stadium");
        }
        false
    }
}
