use super::ExplorationResult;
use crate::airport::AirportId;
use crate::error::Result;
use crate::graph::FlightGraph;
use crate::pathfinding::utils::ensure_vertex;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

/// Every airport in the connected component of `center`, with its hop distance.
pub fn reachable_airports(graph: &FlightGraph, center: AirportId) -> Result<ExplorationResult> {
    let center_airport = Arc::clone(ensure_vertex(graph, center)?);
    let start_time = Instant::now();

    let discovered = discover_component(graph, center);

    let reachable = discovered
        .iter()
        .filter(|&(&id, _)| id != center)
        .filter_map(|(id, &hops)| graph.vertex(*id).map(|airport| (Arc::clone(airport), hops)))
        .collect();

    Ok(ExplorationResult::new(
        center_airport,
        reachable,
        discovered.len(),
        start_time.elapsed().as_millis() as u64,
    ))
}

fn discover_component(graph: &FlightGraph, center: AirportId) -> FxHashMap<AirportId, usize> {
    let mut queue = VecDeque::new();
    let mut discovered = FxHashMap::default();

    queue.push_back((center, 0));
    discovered.insert(center, 0);

    while let Some((current_id, current_layer)) = queue.pop_front() {
        for (connected_id, _) in graph.neighbors(current_id) {
            if !discovered.contains_key(&connected_id) {
                discovered.insert(connected_id, current_layer + 1);
                queue.push_back((connected_id, current_layer + 1));
            }
        }
    }

    discovered
}
