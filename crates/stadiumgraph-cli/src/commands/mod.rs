// Subcommand handlers. main.rs parses arguments, loads the dataset and
// dispatches here.

pub mod inspect;
pub mod route;
pub mod tour;

use serde::Serialize;
use stadiumgraph_lib::{Error as LibError, TextRender, TripFailure};
use stadiumgraph_cli::output::{render, OutputFormat};

/// Print a command result in the selected format.
pub(crate) fn emit<T>(format: OutputFormat, value: &T) -> anyhow::Result<()>
where
    T: Serialize + TextRender + ?Sized,
{
    println!("{}", render(format, value)?);
    Ok(())
}

/// Turn library errors into messages meant for a person at a terminal.
pub(crate) fn friendly_error(error: LibError) -> anyhow::Error {
    match error {
        LibError::UnknownStadium { name, suggestions } => {
            anyhow::anyhow!(format_unknown_stadium_message(&name, &suggestions))
        }
        LibError::InvalidName { raw } => {
            anyhow::anyhow!("'{}' is not a usable stadium name. Use letters or digits.", raw)
        }
        LibError::RouteNotFound { start, goal } => anyhow::anyhow!(
            "No route found between {} and {}. Run `check` to see whether the dataset is connected.",
            start,
            goal
        ),
        LibError::Disconnected => anyhow::anyhow!(
            "The stadium graph is disconnected, so no spanning tree covers it. Load more data with --data."
        ),
        LibError::Trip(TripFailure::Stuck { from, remaining }) => anyhow::anyhow!(
            "Trip stopped at {}: no direct edge to any of {}. Try fewer stops.",
            from,
            remaining.join(", ")
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_stadium_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown stadium '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}
