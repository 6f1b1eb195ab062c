use std::path::PathBuf;

use thiserror::Error;

use crate::trip::TripFailure;

/// Convenient result alias for the stadium graph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Malformed input data never produces one of these: bad rows and bad names
/// are skipped where they occur. These variants describe query outcomes a
/// caller asked for by name and I/O around loading.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a stadium name normalizes to nothing.
    #[error("'{raw}' is not a usable stadium name")]
    InvalidName { raw: String },

    /// Raised when a stadium name could not be found in the graph.
    #[error("unknown stadium name: {name}{}", format_suggestions(.suggestions))]
    UnknownStadium {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two stadiums.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a spanning tree is requested for a disconnected graph.
    #[error("graph is disconnected; no spanning tree covers every stadium")]
    Disconnected,

    /// Raised when the trip planner could not build a trip.
    #[error(transparent)]
    Trip(#[from] TripFailure),

    /// Raised when a CSV source contained no usable rows.
    #[error("no edges could be loaded from {}", .path.display())]
    NoEdgesLoaded { path: PathBuf },

    /// Raised when none of the provided CSV sources could be loaded.
    #[error("none of the {count} dataset file(s) could be loaded")]
    NoDatasetLoaded { count: usize },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error describes a query that found nothing, as opposed to
    /// a bad request or an I/O failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::RouteNotFound { .. } | Error::Disconnected | Error::Trip(_)
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stadium_lists_suggestions() {
        let err = Error::UnknownStadium {
            name: "fenwy".to_string(),
            suggestions: vec!["fenwaypark".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown stadium name: fenwy. Did you mean 'fenwaypark'?"
        );

        let err = Error::UnknownStadium {
            name: "park".to_string(),
            suggestions: vec!["fenwaypark".to_string(), "petcopark".to_string()],
        };
        assert!(err
            .to_string()
            .ends_with("Did you mean one of: 'fenwaypark', 'petcopark'?"));
    }

    #[test]
    fn unknown_stadium_without_suggestions_is_plain() {
        let err = Error::UnknownStadium {
            name: "nowhere".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown stadium name: nowhere");
    }
}
