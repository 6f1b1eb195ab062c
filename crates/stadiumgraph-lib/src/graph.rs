use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, trace};

use crate::name::normalize;

/// Dense index assigned to a stadium the first time its name is seen.
pub type NodeId = usize;

/// Value reported by [`Graph::distance_or_sentinel`] when two stadiums are
/// not directly connected.
pub const NO_EDGE: f64 = -1.0;

/// Undirected edge as listed by [`Graph::edges`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeEntry {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Weighted, undirected stadium graph.
///
/// Names are interned to [`NodeId`]s on insertion and adjacency is stored per
/// index. Every public entry point that accepts a name normalizes it first, so
/// callers can pass display names straight through.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<BTreeMap<NodeId, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an adjacency snapshot without normalizing it.
    ///
    /// Names are stored exactly as given and each `(from, [(to, distance)])`
    /// entry is stored one way only, so the snapshot is trusted to be
    /// symmetric. Anything that did not come from [`Graph::add_edge`] should be
    /// checked with [`Graph::validate`] and repaired with [`Graph::cleanup`].
    pub fn from_raw_adjacency<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, N)>,
        N: IntoIterator<Item = (String, f64)>,
    {
        let mut graph = Self::new();
        for (from, neighbours) in entries {
            let from_id = graph.intern(from);
            for (to, distance) in neighbours {
                let to_id = graph.intern(to);
                graph.adjacency[from_id].insert(to_id, distance);
            }
        }
        graph
    }

    /// Add a stadium. Names that do not normalize are ignored.
    pub fn add_node(&mut self, name: &str) -> Option<NodeId> {
        let canonical = normalize(name)?;
        Some(self.intern(canonical))
    }

    /// Connect two stadiums in both directions, replacing any previous weight.
    ///
    /// Returns `false` without touching the graph when either name fails to
    /// normalize, both names resolve to the same stadium, or `distance` is
    /// not a positive finite number.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) -> bool {
        let (Some(from), Some(to)) = (normalize(from), normalize(to)) else {
            return false;
        };
        if !(distance.is_finite() && distance > 0.0) {
            debug!(%from, %to, distance, "ignoring non-positive edge distance");
            return false;
        }
        if from == to {
            debug!(stadium = %from, "ignoring self-loop");
            return false;
        }

        let from_id = self.intern(from);
        let to_id = self.intern(to);
        self.adjacency[from_id].insert(to_id, distance);
        self.adjacency[to_id].insert(from_id, distance);
        trace!(from = from_id, to = to_id, distance, "stored edge");
        true
    }

    /// Direct edge weight between two stadiums, if one is stored.
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.id_of(from)?;
        let to = self.id_of(to)?;
        self.edge_weight(from, to)
    }

    /// Direct edge weight, or [`NO_EDGE`] when the stadiums are not adjacent.
    pub fn distance_or_sentinel(&self, from: &str, to: &str) -> f64 {
        self.distance(from, to).unwrap_or(NO_EDGE)
    }

    /// Snapshot of every canonical stadium name.
    pub fn nodes(&self) -> Vec<String> {
        self.names.clone()
    }

    /// Neighbours of a stadium with their distances. Empty if unknown.
    pub fn neighbors(&self, name: &str) -> Vec<(String, f64)> {
        let Some(id) = self.id_of(name) else {
            return Vec::new();
        };
        self.edges_from(id)
            .filter_map(|(target, distance)| {
                self.name(target).map(|name| (name.to_string(), distance))
            })
            .collect()
    }

    /// Remove every stadium and edge.
    pub fn clear(&mut self) {
        self.names.clear();
        self.index.clear();
        self.adjacency.clear();
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether a stadium with this name (after normalization) exists.
    pub fn contains(&self, name: &str) -> bool {
        self.id_of(name).is_some()
    }

    /// Resolve a raw name to its node index.
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        let canonical = normalize(name)?;
        self.index.get(&canonical).copied()
    }

    /// Canonical name stored for a node index.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Iterate over node indices.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.names.len()
    }

    /// Outgoing edges of a node in index order.
    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(&target, &distance)| (target, distance)))
    }

    /// Outgoing edges ordered by ascending distance, ties broken by name, so
    /// that traversal order depends on graph content only.
    pub fn sorted_edges_from(&self, id: NodeId) -> Vec<(NodeId, f64)> {
        let mut edges: Vec<(NodeId, f64)> = self.edges_from(id).collect();
        edges.sort_by(|a, b| {
            compare_distance(a.1, b.1).then_with(|| self.name(a.0).cmp(&self.name(b.0)))
        });
        edges
    }

    /// Stored weight of the edge `from -> to`.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.adjacency.get(from)?.get(&to).copied()
    }

    /// Every undirected edge once, with the lower-indexed stadium first.
    pub fn edges(&self) -> Vec<EdgeEntry> {
        let mut entries = Vec::new();
        for from in self.node_ids() {
            for (to, distance) in self.edges_from(from) {
                if from < to {
                    entries.push(EdgeEntry {
                        from: self.names[from].clone(),
                        to: self.names[to].clone(),
                        distance,
                    });
                }
            }
        }
        entries
    }

    /// Stadium pairs that have no direct edge between them.
    pub fn missing_pairs(&self) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        for a in self.node_ids() {
            for b in (a + 1)..self.names.len() {
                if self.edge_weight(a, b).is_none() {
                    missing.push((self.names[a].clone(), self.names[b].clone()));
                }
            }
        }
        missing
    }

    /// Index of the stadium whose canonical name sorts first.
    pub(crate) fn first_by_name(&self) -> Option<NodeId> {
        self.node_ids().min_by(|&a, &b| self.names[a].cmp(&self.names[b]))
    }

    /// Drop every node rejected by `keep` along with all edges touching it,
    /// then re-index the survivors. Returns the number of removed adjacency
    /// entries (nodes plus dangling neighbour links).
    pub(crate) fn retain_nodes<F>(&mut self, keep: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let mut remap: Vec<Option<NodeId>> = Vec::with_capacity(self.names.len());
        let mut names = Vec::new();
        for name in &self.names {
            if keep(name) {
                remap.push(Some(names.len()));
                names.push(name.clone());
            } else {
                remap.push(None);
            }
        }

        let mut removed = 0;
        let mut adjacency = Vec::with_capacity(names.len());
        for (old_id, edges) in self.adjacency.iter().enumerate() {
            if remap[old_id].is_none() {
                removed += 1;
                continue;
            }
            let mut kept = BTreeMap::new();
            for (&target, &distance) in edges {
                match remap.get(target).copied().flatten() {
                    Some(new_target) => {
                        kept.insert(new_target, distance);
                    }
                    None => removed += 1,
                }
            }
            adjacency.push(kept);
        }

        self.index = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        self.names = names;
        self.adjacency = adjacency;
        removed
    }

    fn intern(&mut self, name: String) -> NodeId {
        if let Some(&id) = self.index.get(&name) {
            return id;
        }
        let id = self.names.len();
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.adjacency.push(BTreeMap::new());
        id
    }
}

pub(crate) fn compare_distance(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
