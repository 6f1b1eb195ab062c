//! Breadth-first and depth-first traversal.
//!
//! Both walks offer a node's neighbours in ascending edge-weight order (ties
//! by canonical name), so the visiting order is fully determined by the
//! graph's content. `total_distance` only counts the edge through which each
//! stadium was first discovered.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{trace, warn};

use crate::graph::{Graph, NodeId};

/// Visiting order produced by [`Graph::bfs`] or [`Graph::dfs`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traversal {
    pub order: Vec<String>,
    pub total_distance: f64,
}

impl Graph {
    /// Breadth-first traversal from `start`. `None` if `start` is unknown.
    pub fn bfs(&self, start: &str) -> Option<Traversal> {
        let start = self.id_of(start)?;
        let (order, total) = walk_bfs(self, start);
        Some(self.traversal_from_ids(&order, total))
    }

    /// Depth-first traversal from `start`. `None` if `start` is unknown.
    pub fn dfs(&self, start: &str) -> Option<Traversal> {
        let start = self.id_of(start)?;
        let mut walk = DepthFirst::new(self);
        walk.visit(start, 0, 0.0);
        Some(self.traversal_from_ids(&walk.order, walk.total))
    }

    fn traversal_from_ids(&self, order: &[NodeId], total_distance: f64) -> Traversal {
        Traversal {
            order: order
                .iter()
                .filter_map(|&id| self.name(id).map(str::to_string))
                .collect(),
            total_distance,
        }
    }
}

fn walk_bfs(graph: &Graph, start: NodeId) -> (Vec<NodeId>, f64) {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();
    let mut total = 0.0;

    visited[start] = true;
    queue.push_back(start);
    order.push(start);

    while let Some(current) = queue.pop_front() {
        for (next, distance) in graph.sorted_edges_from(current) {
            if next == current || next >= node_count || visited[next] {
                continue;
            }
            visited[next] = true;
            total += distance;
            order.push(next);
            queue.push_back(next);
        }
    }

    (order, total)
}

struct DepthFirst<'a> {
    graph: &'a Graph,
    visited: Vec<bool>,
    order: Vec<NodeId>,
    total: f64,
    max_depth: usize,
}

impl<'a> DepthFirst<'a> {
    fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.node_count()],
            order: Vec::new(),
            total: 0.0,
            max_depth: graph.node_count() + 10,
        }
    }

    /// `via` is the weight of the edge that discovered `node`.
    fn visit(&mut self, node: NodeId, depth: usize, via: f64) {
        if depth > self.max_depth {
            warn!(node, depth, "dfs depth cap exceeded; abandoning branch");
            return;
        }
        self.total += via;
        self.visited[node] = true;
        self.order.push(node);
        trace!(node, depth, "dfs visiting");

        for (next, distance) in self.graph.sorted_edges_from(node) {
            if next == node || next >= self.visited.len() {
                continue;
            }
            if !self.visited[next] {
                self.visit(next, depth + 1, distance);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///   a --1-- b --4-- d
    ///   |       |
    ///   2       1
    ///   |       |
    ///   c --5-- e
    /// ```
    fn sample() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("a", "c", 2.0);
        graph.add_edge("b", "d", 4.0);
        graph.add_edge("b", "e", 1.0);
        graph.add_edge("c", "e", 5.0);
        graph
    }

    #[test]
    fn bfs_visits_level_by_level_in_weight_order() {
        let traversal = sample().bfs("A").expect("known start");
        assert_eq!(traversal.order, vec!["a", "b", "c", "e", "d"]);
        // a-b, a-c, b-e, b-d
        assert_eq!(traversal.total_distance, 8.0);
    }

    #[test]
    fn dfs_descends_along_cheapest_edge_first() {
        let traversal = sample().dfs("a").expect("known start");
        assert_eq!(traversal.order, vec!["a", "b", "e", "c", "d"]);
        // a-b, b-e, e-c, b-d
        assert_eq!(traversal.total_distance, 11.0);
    }

    #[test]
    fn abandoned_branch_adds_no_distance() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "c", 2.0);
        graph.add_edge("c", "d", 4.0);

        let mut walk = DepthFirst::new(&graph);
        walk.max_depth = 1;
        walk.visit(0, 0, 0.0);

        assert_eq!(walk.order, vec![0, 1]);
        assert_eq!(walk.total, 1.0);
    }

    #[test]
    fn traversal_from_unknown_start_is_not_found() {
        let graph = sample();
        assert!(graph.bfs("z").is_none());
        assert!(graph.dfs("").is_none());
    }

    #[test]
    fn traversal_stays_in_start_component() {
        let mut graph = sample();
        graph.add_edge("x", "y", 9.0);

        let traversal = graph.bfs("x").expect("known start");
        assert_eq!(traversal.order, vec!["x", "y"]);
        assert_eq!(traversal.total_distance, 9.0);
    }

    #[test]
    fn self_loops_from_raw_imports_are_skipped() {
        let graph = Graph::from_raw_adjacency(vec![
            (
                "a".to_string(),
                vec![("a".to_string(), 1.0), ("b".to_string(), 2.0)],
            ),
            ("b".to_string(), vec![("a".to_string(), 2.0)]),
        ]);

        let dfs = graph.dfs("a").expect("known start");
        assert_eq!(dfs.order, vec!["a", "b"]);
        assert_eq!(dfs.total_distance, 2.0);

        let bfs = graph.bfs("a").expect("known start");
        assert_eq!(bfs.order, vec!["a", "b"]);
        assert_eq!(bfs.total_distance, 2.0);
    }
}
