//! Greedy nearest-neighbour trip planning.
//!
//! From the current stadium, the planner always moves to the closest stop
//! that has not been visited yet, using direct edges only. This is a
//! heuristic: it is fast and deterministic but can produce a longer trip than
//! the optimal tour.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Stops in visiting order with the summed leg distances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    pub total_distance: f64,
    /// Canonical names; the start stadium is always first.
    pub order: Vec<String>,
}

impl TripPlan {
    /// Number of legs travelled.
    pub fn leg_count(&self) -> usize {
        self.order.len().saturating_sub(1)
    }
}

/// Why a trip could not be planned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripFailure {
    #[error("a trip needs at least one stop")]
    NoStops,

    #[error("trip stadium '{name}' is not in the graph")]
    UnknownStadium { name: String },

    #[error("no direct connection from {from} to any remaining stop ({})", .remaining.join(", "))]
    Stuck { from: String, remaining: Vec<String> },
}

impl Graph {
    /// Plan a trip from `start` through every stop in `stops`.
    ///
    /// When two remaining stops are equally close, the one listed first in
    /// `stops` is taken. Repeated stops are visited once, and a stop that
    /// names the start stadium counts as already visited.
    pub fn plan_trip<S: AsRef<str>>(
        &self,
        start: &str,
        stops: &[S],
    ) -> Result<TripPlan, TripFailure> {
        let start_id = self.id_of(start).ok_or_else(|| TripFailure::UnknownStadium {
            name: start.to_string(),
        })?;
        if stops.is_empty() {
            return Err(TripFailure::NoStops);
        }

        let mut remaining: Vec<NodeId> = Vec::with_capacity(stops.len());
        for stop in stops {
            let stop = stop.as_ref();
            let id = self.id_of(stop).ok_or_else(|| TripFailure::UnknownStadium {
                name: stop.to_string(),
            })?;
            if id != start_id && !remaining.contains(&id) {
                remaining.push(id);
            }
        }

        let mut order = vec![start_id];
        let mut total_distance = 0.0;
        let mut current = start_id;

        while !remaining.is_empty() {
            let mut nearest: Option<(usize, f64)> = None;
            for (slot, &stop) in remaining.iter().enumerate() {
                let Some(distance) = self.edge_weight(current, stop) else {
                    continue;
                };
                if nearest.map_or(true, |(_, best)| distance < best) {
                    nearest = Some((slot, distance));
                }
            }

            let Some((slot, distance)) = nearest else {
                return Err(TripFailure::Stuck {
                    from: self.display(current),
                    remaining: remaining.iter().map(|&id| self.display(id)).collect(),
                });
            };

            current = remaining.remove(slot);
            order.push(current);
            total_distance += distance;
            debug!(stop = %self.display(current), distance, "added trip leg");
        }

        debug!(total_distance, legs = order.len() - 1, "trip planning complete");
        Ok(TripPlan {
            total_distance,
            order: order.into_iter().map(|id| self.display(id)).collect(),
        })
    }

    fn display(&self, id: NodeId) -> String {
        self.name(id).unwrap_or("<unknown>").to_string()
    }
}
