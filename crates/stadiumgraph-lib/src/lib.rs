//! Stadium graph library entry points.
//!
//! This crate keeps a weighted, undirected graph of stadiums keyed by a
//! canonical form of their names, loads it from `(from, to, distance)` CSV
//! rows, and runs the query algorithms over it: shortest paths (Dijkstra and
//! A*), Prim's minimum spanning tree, BFS/DFS traversal and a greedy
//! multi-stop trip planner. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

pub mod error;
pub mod graph;
pub mod integrity;
pub mod loader;
pub mod name;
pub mod output;
pub mod path;
pub mod query;
pub mod traversal;
pub mod tree;
pub mod trip;

pub use error::{Error, Result};
pub use graph::{EdgeEntry, Graph, NodeId};
pub use integrity::IntegrityReport;
pub use loader::{
    load_csv, load_csv_files, load_csv_reader, EdgeRecord, IngestReport, LoadSummary,
};
pub use name::normalize;
pub use output::{RouteSummary, TextRender};
pub use path::Route;
pub use query::{RouteAlgorithm, RouteRequest, TraversalKind};
pub use traversal::Traversal;
pub use tree::{Disconnected, SpanningTree};
pub use trip::{TripFailure, TripPlan};
