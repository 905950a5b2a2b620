use crate::airport::{Airport, AirportId};
use crate::error::{FlightNetError, Result};
use crate::graph::FlightGraph;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// An airport on a path with the weight of the edge used to reach it (0 for the source).
pub type PathStep = (Arc<Airport>, u64);
pub type PathResult = (Option<Vec<PathStep>>, usize, f64);

pub type ParentMap = FxHashMap<AirportId, (AirportId, u64)>;

pub fn ensure_vertex(graph: &FlightGraph, id: AirportId) -> Result<&Arc<Airport>> {
    graph.vertex(id).ok_or(FlightNetError::UnknownAirport(id))
}

pub fn reconstruct_path(
    parent_map: &ParentMap,
    start: AirportId,
    target: AirportId,
) -> Vec<(AirportId, u64)> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        let (parent_node, weight) = parent_map[&current_node];
        path.push((current_node, weight));
        current_node = parent_node;
    }

    path.push((start, 0));
    path.reverse();
    path
}

pub fn resolve_path_steps(graph: &FlightGraph, steps: Vec<(AirportId, u64)>) -> Vec<PathStep> {
    steps
        .into_iter()
        .filter_map(|(id, weight)| graph.vertex(id).map(|airport| (Arc::clone(airport), weight)))
        .collect()
}
