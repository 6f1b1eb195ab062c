//! Read-only views of the loaded dataset.

use anyhow::Result;
use stadiumgraph_lib::{query, Graph};
use stadiumgraph_cli::output::{
    CheckReport, DirectDistance, MissingPairs, Neighbor, NeighborList, OutputFormat, StadiumList,
};

use super::{emit, friendly_error};

pub fn handle_stadiums(graph: &Graph, format: OutputFormat) -> Result<()> {
    let mut stadiums = graph.nodes();
    stadiums.sort();
    emit(format, &StadiumList { stadiums })
}

pub fn handle_neighbors(graph: &Graph, format: OutputFormat, name: &str) -> Result<()> {
    let stadium = query::resolve(graph, name).map_err(friendly_error)?;
    let mut neighbors: Vec<Neighbor> = graph
        .neighbors(&stadium)
        .into_iter()
        .map(|(name, distance)| Neighbor { name, distance })
        .collect();
    neighbors.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.name.cmp(&b.name))
    });
    emit(format, &NeighborList { stadium, neighbors })
}

pub fn handle_distance(graph: &Graph, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let from = query::resolve(graph, from).map_err(friendly_error)?;
    let to = query::resolve(graph, to).map_err(friendly_error)?;
    let distance = graph.distance(&from, &to);
    emit(format, &DirectDistance { from, to, distance })
}

pub fn handle_edges(graph: &Graph, format: OutputFormat) -> Result<()> {
    let mut edges = graph.edges();
    edges.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
    emit(format, edges.as_slice())
}

pub fn handle_missing(graph: &Graph, format: OutputFormat) -> Result<()> {
    emit(
        format,
        &MissingPairs {
            pairs: graph.missing_pairs(),
        },
    )
}

pub fn handle_check(graph: &Graph, format: OutputFormat) -> Result<()> {
    let report = CheckReport {
        stadiums: graph.node_count(),
        edges: graph.edge_count(),
        connected: graph.is_connected(),
        integrity: graph.integrity_report(),
    };
    emit(format, &report)
}
