#![allow(dead_code)]

use std::path::PathBuf;

use stadiumgraph_lib::{load_csv, Graph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn ballparks() -> Graph {
    let mut graph = Graph::new();
    load_csv(&mut graph, &fixtures_dir().join("ballparks.csv")).expect("load fixture ballparks.csv");
    graph
}

/// Sum of the stored edge weights along consecutive stadiums of `path`.
pub fn path_weight(graph: &Graph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .distance(&pair[0], &pair[1])
                .expect("consecutive stadiums are adjacent")
        })
        .sum()
}
