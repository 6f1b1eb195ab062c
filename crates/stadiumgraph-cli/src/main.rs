mod commands;

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use stadiumgraph_cli::output::OutputFormat;
use stadiumgraph_lib::{load_csv_files, Graph, RouteAlgorithm, TraversalKind};

use commands::route::RouteCommandArgs;

/// Environment variable holding a path list of CSV files, used when no
/// `--data` flag is given.
const DATA_ENV: &str = "STADIUMGRAPH_DATA";

#[derive(Parser, Debug)]
#[command(author, version, about = "Stadium distance graph queries")]
struct Cli {
    /// CSV file of `from,to,distance` rows. Repeat to merge several files.
    #[arg(long = "data", global = true)]
    data: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every stadium in the dataset.
    Stadiums,
    /// Show the direct neighbours of a stadium.
    Neighbors {
        /// Stadium name.
        name: String,
    },
    /// Show the direct edge distance between two stadiums.
    Distance {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Compute the shortest route between two stadiums.
    Route {
        /// Starting stadium name.
        #[arg(long = "from")]
        from: String,
        /// Destination stadium name.
        #[arg(long = "to")]
        to: String,
        /// Path-finding algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
    },
    /// Build the minimum spanning tree of the whole dataset.
    Mst,
    /// Breadth-first traversal from a stadium.
    Bfs {
        #[arg(long = "from")]
        from: String,
    },
    /// Depth-first traversal from a stadium.
    Dfs {
        #[arg(long = "from")]
        from: String,
    },
    /// Plan a greedy trip through several stadiums.
    Trip {
        /// Starting stadium name.
        #[arg(long = "from")]
        from: String,
        /// Stadium to visit. Repeat for every stop.
        #[arg(long = "stop", required = true)]
        stops: Vec<String>,
    },
    /// Report connectivity and integrity of the dataset.
    Check,
    /// List every edge once.
    Edges,
    /// List stadium pairs without a direct edge.
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Dijkstra,
    AStar,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = load_graph(cli.data)?;
    let format = cli.format;

    match cli.command {
        Command::Stadiums => commands::inspect::handle_stadiums(&graph, format),
        Command::Neighbors { name } => commands::inspect::handle_neighbors(&graph, format, &name),
        Command::Distance { from, to } => {
            commands::inspect::handle_distance(&graph, format, &from, &to)
        }
        Command::Route {
            from,
            to,
            algorithm,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm: algorithm.into(),
            };
            commands::route::handle_route_command(&graph, format, &args)
        }
        Command::Mst => commands::tour::handle_mst(&graph, format),
        Command::Bfs { from } => {
            commands::tour::handle_traversal(&graph, format, &from, TraversalKind::Bfs)
        }
        Command::Dfs { from } => {
            commands::tour::handle_traversal(&graph, format, &from, TraversalKind::Dfs)
        }
        Command::Trip { from, stops } => commands::tour::handle_trip(&graph, format, &from, &stops),
        Command::Check => commands::inspect::handle_check(&graph, format),
        Command::Edges => commands::inspect::handle_edges(&graph, format),
        Command::Missing => commands::inspect::handle_missing(&graph, format),
    }
}

fn load_graph(mut paths: Vec<PathBuf>) -> Result<Graph> {
    if paths.is_empty() {
        if let Some(list) = env::var_os(DATA_ENV) {
            paths.extend(env::split_paths(&list).filter(|p| !p.as_os_str().is_empty()));
        }
    }
    if paths.is_empty() {
        bail!("No dataset given. Pass --data <CSV> or set {DATA_ENV}.");
    }

    let mut graph = Graph::new();
    let summary = load_csv_files(&mut graph, &paths).context("failed to load stadium dataset")?;
    for failed in &summary.failed {
        tracing::warn!(path = %failed.display(), "dataset file skipped");
    }
    tracing::debug!(
        stadiums = summary.stadiums,
        edges = summary.edges,
        "graph loaded"
    );
    Ok(graph)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
