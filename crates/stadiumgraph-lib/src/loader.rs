//! Ingestion of `(from, to, distance)` rows.
//!
//! Bad rows are skipped and counted; they never abort a batch. A source only
//! fails as a whole when it cannot be read or when none of its rows produced
//! an edge.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Header cells that mark the first CSV line as a header row.
const HEADER_MARKERS: [&str; 2] = ["Distance", "Mileage"];

/// One edge as read from an external source.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// Counters for one ingested source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Data rows seen, excluding a detected header.
    pub rows: usize,
    /// Rows that produced an edge.
    pub edges: usize,
    /// Rows that were skipped as malformed.
    pub skipped: usize,
}

impl IngestReport {
    /// Whether at least one row produced an edge.
    pub fn succeeded(&self) -> bool {
        self.edges > 0
    }

    fn record(&mut self, stored: bool) {
        self.rows += 1;
        if stored {
            self.edges += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Outcome of loading several CSV sources into one graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadSummary {
    pub loaded: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    pub edges: usize,
    pub stadiums: usize,
}

impl Graph {
    /// Add every well-formed record to the graph.
    pub fn ingest<I>(&mut self, records: I) -> IngestReport
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut report = IngestReport::default();
        for record in records {
            let stored = self.add_edge(&record.from, &record.to, record.distance);
            report.record(stored);
        }
        report
    }
}

/// Load one CSV file into `graph`, merging with what is already there.
pub fn load_csv(graph: &mut Graph, path: &Path) -> Result<IngestReport> {
    debug!(path = %path.display(), "loading csv");
    let file = File::open(path)?;
    let report = load_csv_reader(graph, file)?;
    if !report.succeeded() {
        return Err(Error::NoEdgesLoaded {
            path: path.to_path_buf(),
        });
    }
    info!(
        path = %path.display(),
        rows = report.rows,
        edges = report.edges,
        skipped = report.skipped,
        "loaded csv"
    );
    Ok(report)
}

/// Load CSV rows from any reader.
///
/// The first line is treated as a header only if one of its cells mentions
/// `Distance` or `Mileage`. Columns past the third are ignored.
pub fn load_csv_reader<R: Read>(graph: &mut Graph, reader: R) -> Result<IngestReport> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut report = IngestReport::default();
    for (line, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!(line = line + 1, error = %err, "skipping unreadable csv row");
                report.record(false);
                continue;
            }
        };
        if line == 0 && is_header(&record) {
            trace!("skipping csv header");
            continue;
        }
        if record.iter().all(str::is_empty) {
            continue;
        }

        let stored = match parse_row(&record) {
            Some(edge) => graph.add_edge(&edge.from, &edge.to, edge.distance),
            None => {
                trace!(line = line + 1, "skipping malformed csv row");
                false
            }
        };
        report.record(stored);
    }
    Ok(report)
}

/// Load several CSV files into the same graph without clearing it between
/// sources. Fails only if every file failed.
pub fn load_csv_files<P: AsRef<Path>>(graph: &mut Graph, paths: &[P]) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();
    for path in paths {
        let path = path.as_ref();
        match load_csv(graph, path) {
            Ok(report) => {
                summary.edges += report.edges;
                summary.loaded.push(path.to_path_buf());
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load csv");
                summary.failed.push(path.to_path_buf());
            }
        }
    }

    if summary.loaded.is_empty() {
        return Err(Error::NoDatasetLoaded { count: paths.len() });
    }
    summary.stadiums = graph.node_count();
    info!(
        files = summary.loaded.len(),
        stadiums = summary.stadiums,
        edges = graph.edge_count(),
        "dataset ready"
    );
    Ok(summary)
}

fn is_header(record: &StringRecord) -> bool {
    record
        .iter()
        .any(|cell| HEADER_MARKERS.iter().any(|marker| cell.contains(marker)))
}

fn parse_row(record: &StringRecord) -> Option<EdgeRecord> {
    let from = record.get(0).filter(|s| !s.is_empty())?;
    let to = record.get(1).filter(|s| !s.is_empty())?;
    let distance: f64 = record.get(2).filter(|s| !s.is_empty())?.parse().ok()?;
    if !(distance > 0.0) {
        return None;
    }
    Some(EdgeRecord::new(from, to, distance))
}
