//! Output formatting for command results.
//!
//! Every command result implements both [`Serialize`] and [`TextRender`];
//! [`render`] picks the representation selected with `--format`.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;
use stadiumgraph_lib::output::format_distance;
use stadiumgraph_lib::{IntegrityReport, TextRender};

/// Output representation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render a command result in the requested format.
pub fn render<T>(format: OutputFormat, value: &T) -> serde_json::Result<String>
where
    T: Serialize + TextRender + ?Sized,
{
    match format {
        OutputFormat::Text => Ok(value.render_text()),
        OutputFormat::Json => serde_json::to_string_pretty(value),
    }
}

/// Sorted list of canonical stadium names.
#[derive(Debug, Clone, Serialize)]
pub struct StadiumList {
    pub stadiums: Vec<String>,
}

impl TextRender for StadiumList {
    fn render_text(&self) -> String {
        let mut buffer = String::new();
        for stadium in &self.stadiums {
            let _ = writeln!(buffer, "{stadium}");
        }
        let _ = write!(buffer, "Total stadiums: {}", self.stadiums.len());
        buffer
    }
}

/// Direct neighbours of one stadium.
#[derive(Debug, Clone, Serialize)]
pub struct NeighborList {
    pub stadium: String,
    pub neighbors: Vec<Neighbor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Neighbor {
    pub name: String,
    pub distance: f64,
}

impl TextRender for NeighborList {
    fn render_text(&self) -> String {
        let mut buffer = format!("Neighbors of {}:\n", self.stadium);
        for neighbor in &self.neighbors {
            let _ = writeln!(
                buffer,
                "  {}: {}",
                neighbor.name,
                format_distance(neighbor.distance)
            );
        }
        let _ = write!(buffer, "Total neighbors: {}", self.neighbors.len());
        buffer
    }
}

/// Direct edge lookup between two stadiums.
#[derive(Debug, Clone, Serialize)]
pub struct DirectDistance {
    pub from: String,
    pub to: String,
    /// `None` when the stadiums are not adjacent.
    pub distance: Option<f64>,
}

impl TextRender for DirectDistance {
    fn render_text(&self) -> String {
        match self.distance {
            Some(distance) => format!(
                "{} <-> {}: {}",
                self.from,
                self.to,
                format_distance(distance)
            ),
            None => format!("No direct edge between {} and {}.", self.from, self.to),
        }
    }
}

/// Pairs of stadiums without a direct edge.
#[derive(Debug, Clone, Serialize)]
pub struct MissingPairs {
    pub pairs: Vec<(String, String)>,
}

impl TextRender for MissingPairs {
    fn render_text(&self) -> String {
        let mut buffer = String::new();
        for (a, b) in &self.pairs {
            let _ = writeln!(buffer, "{a} -/- {b}");
        }
        let _ = write!(buffer, "Missing pairs: {}", self.pairs.len());
        buffer
    }
}

/// Health summary of the loaded dataset.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub stadiums: usize,
    pub edges: usize,
    pub connected: bool,
    pub integrity: IntegrityReport,
}

impl TextRender for CheckReport {
    fn render_text(&self) -> String {
        format!(
            "Stadiums: {}\nEdges: {}\nConnected: {}\n{}",
            self.stadiums,
            self.edges,
            if self.connected { "yes" } else { "no" },
            self.integrity.render_text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_format_uses_text_render() {
        let list = StadiumList {
            stadiums: vec!["citifield".to_string(), "fenwaypark".to_string()],
        };
        let text = render(OutputFormat::Text, &list).unwrap();
        assert_eq!(text, "citifield\nfenwaypark\nTotal stadiums: 2");
    }

    #[test]
    fn json_format_serialises_fields() {
        let distance = DirectDistance {
            from: "a".to_string(),
            to: "b".to_string(),
            distance: None,
        };
        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, &distance).unwrap()).unwrap();
        assert_eq!(json["from"], "a");
        assert!(json["distance"].is_null());
    }

    #[test]
    fn missing_distance_is_explained() {
        let distance = DirectDistance {
            from: "a".to_string(),
            to: "b".to_string(),
            distance: None,
        };
        assert_eq!(distance.render_text(), "No direct edge between a and b.");
    }

    #[test]
    fn check_report_includes_integrity() {
        let report = CheckReport {
            stadiums: 3,
            edges: 2,
            connected: false,
            integrity: IntegrityReport::default(),
        };
        let text = report.render_text();
        assert!(text.contains("Connected: no"));
        assert!(text.ends_with("Valid: yes"));
    }
}
