use std::fmt::Write;

use serde::Serialize;

use crate::graph::EdgeEntry;
use crate::integrity::IntegrityReport;
use crate::path::Route;
use crate::query::RouteAlgorithm;
use crate::traversal::Traversal;
use crate::tree::SpanningTree;
use crate::trip::TripPlan;

/// Structured representation of a computed route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub distance: f64,
    pub path: Vec<String>,
}

impl RouteSummary {
    pub fn new(algorithm: RouteAlgorithm, route: Route) -> Self {
        let hops = route.hop_count();
        Self {
            algorithm,
            start: route.path.first().cloned().unwrap_or_default(),
            goal: route.path.last().cloned().unwrap_or_default(),
            hops,
            distance: route.distance,
            path: route.path,
        }
    }
}

/// Plain-text rendering used by the CLI.
pub trait TextRender {
    fn render_text(&self) -> String;
}

impl TextRender for RouteSummary {
    fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} hops, algorithm: {}):",
            self.start, self.goal, self.hops, self.algorithm
        );
        for (index, stadium) in self.path.iter().enumerate() {
            let marker = if index == 0 {
                '+'
            } else if index + 1 == self.path.len() {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "  {marker} {stadium}");
        }
        let _ = write!(buffer, "Total distance: {}", format_distance(self.distance));
        buffer
    }
}

impl TextRender for SpanningTree {
    fn render_text(&self) -> String {
        let mut buffer = String::from("Minimum spanning tree:\n");
        for (parent, child) in &self.edges {
            let _ = writeln!(buffer, "  {parent} -- {child}");
        }
        let _ = write!(
            buffer,
            "Edges: {}, total weight: {}",
            self.edges.len(),
            format_distance(self.total_weight)
        );
        buffer
    }
}

impl TextRender for Traversal {
    fn render_text(&self) -> String {
        let mut buffer = String::from("Visit order:\n");
        for (index, stadium) in self.order.iter().enumerate() {
            let _ = writeln!(buffer, "  {:>3}. {stadium}", index + 1);
        }
        let _ = write!(
            buffer,
            "Distance travelled: {}",
            format_distance(self.total_distance)
        );
        buffer
    }
}

impl TextRender for TripPlan {
    fn render_text(&self) -> String {
        let mut buffer = String::from("Trip (greedy nearest stop):\n");
        for (index, stadium) in self.order.iter().enumerate() {
            let _ = writeln!(buffer, "  {:>3}. {stadium}", index + 1);
        }
        let _ = write!(
            buffer,
            "Legs: {}, total distance: {}",
            self.leg_count(),
            format_distance(self.total_distance)
        );
        buffer
    }
}

impl TextRender for IntegrityReport {
    fn render_text(&self) -> String {
        format!(
            "Blank stadium names: {}\nBlank neighbour entries: {}\nAsymmetric edges: {}\nValid: {}",
            self.blank_nodes,
            self.blank_neighbours,
            self.asymmetric_edges,
            if self.is_valid() { "yes" } else { "no" }
        )
    }
}

impl TextRender for [EdgeEntry] {
    fn render_text(&self) -> String {
        let mut buffer = String::new();
        for edge in self {
            let _ = writeln!(
                buffer,
                "{} <-> {}: {}",
                edge.from,
                edge.to,
                format_distance(edge.distance)
            );
        }
        let _ = write!(buffer, "Total edges: {}", self.len());
        buffer
    }
}

/// Format a distance without a trailing `.0` for whole numbers.
pub fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 && distance.abs() < 1e15 {
        format!("{}", distance as i64)
    } else {
        format!("{distance:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RouteSummary {
        RouteSummary::new(
            RouteAlgorithm::Dijkstra,
            Route {
                distance: 8.0,
                path: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            },
        )
    }

    #[test]
    fn summary_exposes_endpoints() {
        let summary = summary();
        assert_eq!(summary.start, "a");
        assert_eq!(summary.goal, "c");
        assert_eq!(summary.hops, 2);
    }

    #[test]
    fn route_text_marks_start_and_goal() {
        let text = summary().render_text();
        assert!(text.contains("algorithm: dijkstra"));
        assert!(text.contains("+ a"));
        assert!(text.contains("| b"));
        assert!(text.contains("- c"));
        assert!(text.ends_with("Total distance: 8"));
    }

    #[test]
    fn route_summary_serialises_algorithm_name() {
        let json = serde_json::to_value(summary()).expect("serialise");
        assert_eq!(json["algorithm"], "dijkstra");
        assert_eq!(json["path"][2], "c");
    }

    #[test]
    fn distance_formatting() {
        assert_eq!(format_distance(8.0), "8");
        assert_eq!(format_distance(2.5), "2.50");
    }

    #[test]
    fn edge_list_text_counts_edges() {
        let edges = vec![EdgeEntry {
            from: "a".to_string(),
            to: "b".to_string(),
            distance: 1.5,
        }];
        let text = edges.render_text();
        assert!(text.contains("a <-> b: 1.50"));
        assert!(text.ends_with("Total edges: 1"));
    }
}
