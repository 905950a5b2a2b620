mod state;

use super::utils::{PathResult, ensure_vertex, resolve_path_steps};
use crate::airport::AirportId;
use crate::error::Result;
use crate::graph::FlightGraph;
use state::BfsState;
use std::time::Instant;
use tracing::debug;

/// Shortest path by hop count between two vertices of `graph`.
///
/// Fails with `UnknownAirport` when either endpoint is not a vertex. An
/// unreachable target yields `None`; `source == target` yields `[source]`.
pub fn bfs_find_path(graph: &FlightGraph, source: AirportId, target: AirportId) -> Result<PathResult> {
    ensure_vertex(graph, source)?;
    ensure_vertex(graph, target)?;

    let search_timer = Instant::now();

    let mut bfs_state = BfsState::new(source);
    let path = bfs_state
        .find_path_to_target(target, graph)
        .map(|steps| resolve_path_steps(graph, steps));

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(
        source,
        target,
        found = path.is_some(),
        visited = bfs_state.visited.len(),
        "bfs search finished"
    );

    Ok((path, bfs_state.visited.len(), elapsed_time))
}
