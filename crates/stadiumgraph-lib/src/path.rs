use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::graph::{Graph, NodeId};

/// Shortest route between two stadiums.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Sum of the edge weights along `path`.
    pub distance: f64,
    /// Canonical names from start to goal, both included.
    pub path: Vec<String>,
}

impl Route {
    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl Graph {
    /// Dijkstra shortest path between two stadiums.
    ///
    /// Returns `None` when either name is unknown or the goal is unreachable.
    pub fn shortest_path(&self, start: &str, goal: &str) -> Option<Route> {
        let start = self.id_of(start)?;
        let goal = self.id_of(goal)?;
        let (distance, ids) = find_route_dijkstra(self, start, goal)?;
        Some(self.route_from_ids(distance, &ids))
    }

    /// A* shortest path between two stadiums.
    ///
    /// No distance estimate is available for stadiums, so the heuristic term
    /// is zero and the search settles nodes in the same cost order as
    /// Dijkstra. Total distances always agree with [`Graph::shortest_path`];
    /// the chosen path may differ when several shortest paths tie.
    pub fn a_star(&self, start: &str, goal: &str) -> Option<Route> {
        let start = self.id_of(start)?;
        let goal = self.id_of(goal)?;
        let (distance, ids) = find_route_a_star(self, start, goal)?;
        Some(self.route_from_ids(distance, &ids))
    }

    fn route_from_ids(&self, distance: f64, ids: &[NodeId]) -> Route {
        Route {
            distance,
            path: ids
                .iter()
                .filter_map(|&id| self.name(id).map(str::to_string))
                .collect(),
        }
    }
}

/// Dijkstra over an explicit unsettled set with O(V²) minimum selection.
///
/// The main loop runs at most `2 × node_count` times and the predecessor walk
/// at most `node_count + 1` steps; hitting either bound means the adjacency
/// data is inconsistent and is reported as no route.
pub fn find_route_dijkstra(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
) -> Option<(f64, Vec<NodeId>)> {
    let node_count = graph.node_count();
    if start >= node_count || goal >= node_count {
        return None;
    }

    let mut distances = vec![f64::INFINITY; node_count];
    let mut previous: Vec<Option<NodeId>> = vec![None; node_count];
    let mut unsettled = vec![true; node_count];
    let mut remaining = node_count;
    distances[start] = 0.0;

    let max_iterations = node_count * 2;
    let mut iterations = 0;
    loop {
        if remaining == 0 {
            break;
        }
        if iterations >= max_iterations {
            warn!(iterations, "dijkstra iteration cap reached");
            return None;
        }
        iterations += 1;

        let mut current = None;
        let mut best = f64::INFINITY;
        for node in 0..node_count {
            if unsettled[node] && distances[node] < best {
                best = distances[node];
                current = Some(node);
            }
        }
        let Some(current) = current else {
            break;
        };
        if current == goal {
            break;
        }

        unsettled[current] = false;
        remaining -= 1;

        for (neighbour, weight) in graph.edges_from(current) {
            if neighbour >= node_count || !unsettled[neighbour] || weight <= 0.0 {
                continue;
            }
            let candidate = distances[current] + weight;
            if candidate < distances[neighbour] {
                distances[neighbour] = candidate;
                previous[neighbour] = Some(current);
            }
        }
    }

    if !distances[goal].is_finite() {
        return None;
    }

    let path = backtrack(&previous, start, goal, node_count + 1)?;
    Some((distances[goal], path))
}

/// Walk predecessor links from `goal` back to `start`.
fn backtrack(
    previous: &[Option<NodeId>],
    start: NodeId,
    goal: NodeId,
    max_len: usize,
) -> Option<Vec<NodeId>> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut current = goal;

    while current != start {
        if path.len() >= max_len {
            warn!(max_len, "path reconstruction exceeded length cap");
            return None;
        }
        if !seen.insert(current) {
            warn!(node = current, "cycle detected while reconstructing path");
            return None;
        }
        path.push(current);
        let Some(parent) = previous.get(current).copied().flatten() else {
            debug!(node = current, "missing predecessor while reconstructing path");
            return None;
        };
        current = parent;
    }

    path.push(start);
    path.reverse();
    Some(path)
}

/// A* with an open priority queue keyed by `f = g` and a closed set.
pub fn find_route_a_star(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
) -> Option<(f64, Vec<NodeId>)> {
    if start >= graph.node_count() || goal >= graph.node_count() {
        return None;
    }

    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut open = BinaryHeap::new();

    g_score.insert(start, 0.0);
    parents.insert(start, None);
    open.push(AStarEntry::new(start, 0.0));

    while let Some(entry) = open.pop() {
        if !closed.insert(entry.node) {
            continue;
        }
        let current_score = g_score.get(&entry.node).copied().unwrap_or(f64::INFINITY);

        if entry.node == goal {
            return Some((current_score, reconstruct_path(&parents, start, goal)));
        }

        for (next, weight) in graph.edges_from(entry.node) {
            if closed.contains(&next) || weight <= 0.0 {
                continue;
            }
            let tentative_g = current_score + weight;
            if tentative_g < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative_g);
                parents.insert(next, Some(entry.node));
                open.push(AStarEntry::new(next, tentative_g));
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<NodeId, Option<NodeId>>,
    start: NodeId,
    goal: NodeId,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: NodeId,
    estimate: FloatOrd,
}

impl AStarEntry {
    // Stadiums carry no coordinates, so there is no admissible estimate of
    // the remaining distance. The queue key is the settled cost alone.
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            estimate: FloatOrd(cost),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // cheapest first, lower index on ties
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5.0);
        graph.add_edge("B", "C", 3.0);
        graph.add_edge("A", "C", 10.0);
        graph
    }

    #[test]
    fn dijkstra_prefers_cheaper_two_hop_route() {
        let route = triangle().shortest_path("A", "C").expect("route exists");
        assert_eq!(route.distance, 8.0);
        assert_eq!(route.path, vec!["a", "b", "c"]);
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn a_star_matches_dijkstra_on_triangle() {
        let route = triangle().a_star("a", "c").expect("route exists");
        assert_eq!(route.distance, 8.0);
        assert_eq!(route.path, vec!["a", "b", "c"]);
    }

    #[test]
    fn same_start_and_goal_is_a_zero_length_route() {
        let graph = triangle();
        for route in [graph.shortest_path("B", "b"), graph.a_star("B", "b")] {
            let route = route.expect("trivial route");
            assert_eq!(route.distance, 0.0);
            assert_eq!(route.path, vec!["b"]);
        }
    }

    #[test]
    fn unknown_or_unreachable_goal_is_not_found() {
        let mut graph = triangle();
        graph.add_edge("X", "Y", 1.0);

        assert!(graph.shortest_path("A", "Nowhere").is_none());
        assert!(graph.shortest_path("A", "X").is_none());
        assert!(graph.a_star("A", "X").is_none());
        assert!(graph.a_star("", "A").is_none());
    }

    #[test]
    fn backtrack_rejects_cycles_and_gaps() {
        // 2 -> 1 -> 2 never reaches 0
        let cyclic = vec![None, Some(2), Some(1)];
        assert!(backtrack(&cyclic, 0, 2, 4).is_none());

        let gap = vec![None, None, Some(1)];
        assert!(backtrack(&gap, 0, 2, 4).is_none());

        let ok = vec![None, Some(0), Some(1)];
        assert_eq!(backtrack(&ok, 0, 2, 4), Some(vec![0, 1, 2]));
    }

    #[test]
    fn backtrack_honours_length_cap() {
        let chain = vec![None, Some(0), Some(1), Some(2)];
        assert!(backtrack(&chain, 0, 3, 2).is_none());
        assert!(backtrack(&chain, 0, 3, 4).is_some());
    }
}
