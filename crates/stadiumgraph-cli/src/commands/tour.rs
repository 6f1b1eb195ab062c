//! Whole-graph walks: spanning tree, traversals and multi-stop trips.

use anyhow::Result;
use stadiumgraph_lib::{query, Graph, TraversalKind};
use stadiumgraph_cli::output::OutputFormat;

use super::{emit, friendly_error};

pub fn handle_mst(graph: &Graph, format: OutputFormat) -> Result<()> {
    let tree = query::spanning_tree(graph).map_err(friendly_error)?;
    emit(format, &tree)
}

pub fn handle_traversal(
    graph: &Graph,
    format: OutputFormat,
    from: &str,
    kind: TraversalKind,
) -> Result<()> {
    let traversal = query::traverse(graph, from, kind).map_err(friendly_error)?;
    tracing::debug!(%kind, visited = traversal.order.len(), "traversal finished");
    emit(format, &traversal)
}

pub fn handle_trip(
    graph: &Graph,
    format: OutputFormat,
    from: &str,
    stops: &[String],
) -> Result<()> {
    let plan = query::trip(graph, from, stops).map_err(friendly_error)?;
    emit(format, &plan)
}
