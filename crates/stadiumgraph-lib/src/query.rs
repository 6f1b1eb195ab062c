//! Name-based query surface with typed errors.
//!
//! The [`Graph`] methods report "nothing found" as `None` or a small outcome
//! type. The helpers here resolve user-supplied names first, so a caller can
//! tell a misspelt stadium (with suggestions) apart from a real absence of a
//! route, and get every outcome as a crate [`Error`].

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::name::normalize;
use crate::output::RouteSummary;
use crate::traversal::Traversal;
use crate::tree::SpanningTree;
use crate::trip::{TripFailure, TripPlan};

/// Minimum Jaro-Winkler similarity for a stadium to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions attached to an unknown-name error.
pub const MAX_SUGGESTIONS: usize = 3;

/// Supported shortest-path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm over an unsettled set.
    #[default]
    Dijkstra,
    /// A* search with a zero heuristic.
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// Traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraversalKind::Bfs => "bfs",
            TraversalKind::Dfs => "dfs",
        })
    }
}

/// Shortest-path request between two stadium names.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }

    /// Convenience constructor for A* routes.
    pub fn a_star(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::AStar,
        }
    }
}

/// Resolve a raw name to the canonical name stored in the graph.
pub fn resolve(graph: &Graph, raw: &str) -> Result<String> {
    let canonical = normalize(raw).ok_or_else(|| Error::InvalidName {
        raw: raw.to_string(),
    })?;
    if graph.id_of(&canonical).is_some() {
        return Ok(canonical);
    }
    Err(Error::UnknownStadium {
        name: raw.to_string(),
        suggestions: suggest(graph, raw, MAX_SUGGESTIONS),
    })
}

/// Stadiums whose canonical name is close to `raw`, best match first.
pub fn suggest(graph: &Graph, raw: &str, limit: usize) -> Vec<String> {
    let Some(canonical) = normalize(raw) else {
        return Vec::new();
    };
    let mut scored: Vec<(f64, String)> = graph
        .nodes()
        .into_iter()
        .map(|name| (strsim::jaro_winkler(&canonical, &name), name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    scored.truncate(limit);
    scored.into_iter().map(|(_, name)| name).collect()
}

/// Compute a route using the requested algorithm.
pub fn route(graph: &Graph, request: &RouteRequest) -> Result<RouteSummary> {
    let start = resolve(graph, &request.start)?;
    let goal = resolve(graph, &request.goal)?;

    let found = match request.algorithm {
        RouteAlgorithm::Dijkstra => graph.shortest_path(&start, &goal),
        RouteAlgorithm::AStar => graph.a_star(&start, &goal),
    };
    let route = found.ok_or_else(|| Error::RouteNotFound {
        start: start.clone(),
        goal: goal.clone(),
    })?;
    Ok(RouteSummary::new(request.algorithm, route))
}

/// Minimum spanning tree, with disconnection reported as an error.
pub fn spanning_tree(graph: &Graph) -> Result<SpanningTree> {
    graph.minimum_spanning_tree().map_err(|_| Error::Disconnected)
}

/// Run a traversal from a named stadium.
pub fn traverse(graph: &Graph, start: &str, kind: TraversalKind) -> Result<Traversal> {
    let start = resolve(graph, start)?;
    let traversal = match kind {
        TraversalKind::Bfs => graph.bfs(&start),
        TraversalKind::Dfs => graph.dfs(&start),
    };
    // `start` was resolved above, so the traversal always has a root.
    traversal.ok_or_else(|| Error::UnknownStadium {
        name: start,
        suggestions: Vec::new(),
    })
}

/// Plan a greedy trip, resolving every name up front.
pub fn trip<S: AsRef<str>>(graph: &Graph, start: &str, stops: &[S]) -> Result<TripPlan> {
    let start = resolve(graph, start)?;
    if stops.is_empty() {
        return Err(TripFailure::NoStops.into());
    }
    let stops = stops
        .iter()
        .map(|stop| resolve(graph, stop.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(graph.plan_trip(&start, &stops)?)
}
