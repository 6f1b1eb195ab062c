//! Minimum spanning tree over the stadium graph (Prim's algorithm).

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Edges selected by Prim's algorithm, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanningTree {
    pub total_weight: f64,
    /// `(parent, child)` pairs of canonical names.
    pub edges: Vec<(String, String)>,
}

/// The graph has more than one component, so no tree spans it.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("graph is disconnected")]
pub struct Disconnected;

impl Graph {
    /// Minimum spanning tree covering every stadium.
    ///
    /// Growth starts at the stadium whose canonical name sorts first. An empty
    /// or single-stadium graph yields an empty tree.
    pub fn minimum_spanning_tree(&self) -> Result<SpanningTree, Disconnected> {
        let Some(root) = self.first_by_name() else {
            return Ok(SpanningTree::default());
        };
        let selected = prim(self, root)?;

        let mut tree = SpanningTree::default();
        for (parent, child, weight) in selected {
            let (Some(parent), Some(child)) = (self.name(parent), self.name(child)) else {
                continue;
            };
            tree.edges.push((parent.to_string(), child.to_string()));
            tree.total_weight += weight;
        }
        Ok(tree)
    }
}

/// Prim's algorithm with key/parent arrays and linear minimum selection.
fn prim(graph: &Graph, root: NodeId) -> Result<Vec<(NodeId, NodeId, f64)>, Disconnected> {
    let node_count = graph.node_count();
    let mut key = vec![f64::INFINITY; node_count];
    let mut parent: Vec<Option<NodeId>> = vec![None; node_count];
    let mut in_tree = vec![false; node_count];
    let mut selected = Vec::with_capacity(node_count.saturating_sub(1));
    key[root] = 0.0;

    for _ in 0..node_count {
        let mut current = None;
        let mut best = f64::INFINITY;
        for node in 0..node_count {
            if !in_tree[node] && key[node] < best {
                best = key[node];
                current = Some(node);
            }
        }
        let Some(current) = current else {
            let unreached = in_tree.iter().filter(|&&done| !done).count();
            debug!(unreached, "spanning tree cannot reach every stadium");
            return Err(Disconnected);
        };

        in_tree[current] = true;
        if let Some(from) = parent[current] {
            selected.push((from, current, key[current]));
        }

        for (neighbour, weight) in graph.edges_from(current) {
            if neighbour < node_count && !in_tree[neighbour] && weight < key[neighbour] {
                key[neighbour] = weight;
                parent[neighbour] = Some(current);
            }
        }
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_drops_the_heaviest_edge() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5.0);
        graph.add_edge("B", "C", 3.0);
        graph.add_edge("A", "C", 10.0);

        let tree = graph.minimum_spanning_tree().expect("connected");
        assert_eq!(tree.total_weight, 8.0);
        assert_eq!(
            tree.edges,
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string())
            ]
        );
    }

    #[test]
    fn disconnected_graph_has_no_tree() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("C", "D", 1.0);

        assert_eq!(graph.minimum_spanning_tree(), Err(Disconnected));
    }

    #[test]
    fn isolated_stadium_disconnects_the_graph() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_node("Lonely Field");

        assert!(graph.minimum_spanning_tree().is_err());
    }

    #[test]
    fn empty_and_single_node_graphs_have_empty_trees() {
        let mut graph = Graph::new();
        assert_eq!(graph.minimum_spanning_tree(), Ok(SpanningTree::default()));

        graph.add_node("Solo");
        let tree = graph.minimum_spanning_tree().expect("single node");
        assert!(tree.edges.is_empty());
        assert_eq!(tree.total_weight, 0.0);
    }

    #[test]
    fn root_is_first_name_alphabetically() {
        let mut graph = Graph::new();
        graph.add_edge("Zeta", "Alpha", 4.0);
        graph.add_edge("Zeta", "Mu", 1.0);

        let tree = graph.minimum_spanning_tree().expect("connected");
        assert_eq!(tree.edges[0], ("alpha".to_string(), "zeta".to_string()));
        assert_eq!(tree.edges[1], ("zeta".to_string(), "mu".to_string()));
    }
}
