use anyhow::Result;
use stadiumgraph_lib::{query, Graph, RouteAlgorithm, RouteRequest};
use stadiumgraph_cli::output::OutputFormat;

use super::{emit, friendly_error};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting stadium name.
    pub from: String,
    /// Destination stadium name.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            algorithm: self.algorithm,
        }
    }
}

pub fn handle_route_command(
    graph: &Graph,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let request = args.to_request();
    let summary = query::route(graph, &request).map_err(friendly_error)?;
    tracing::debug!(
        algorithm = %summary.algorithm,
        hops = summary.hops,
        distance = summary.distance,
        "route planned"
    );
    emit(format, &summary)
}
