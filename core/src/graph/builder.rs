use super::FlightGraph;
use crate::airport::{Airport, Route};
use std::sync::Arc;
use tracing::debug;

/// Builds a fresh graph for `threshold`.
///
/// `vertex_provider` decides which airports qualify; the result is trusted as-is.
/// Routes whose endpoints are not both vertices are skipped, as are routes that
/// start and end at the same airport. Parallel routes are merged by summing
/// their flight counts.
pub fn build_graph<V, VI, R, RI>(threshold: u32, vertex_provider: V, route_provider: R) -> FlightGraph
where
    V: FnOnce(u32) -> VI,
    VI: IntoIterator<Item = Arc<Airport>>,
    R: FnOnce() -> RI,
    RI: IntoIterator<Item = Route>,
{
    let mut graph = FlightGraph::new();

    for airport in vertex_provider(threshold) {
        graph.add_vertex(airport);
    }

    let mut skipped_routes = 0usize;
    let mut merged_routes = 0usize;

    for route in route_provider() {
        let (origin, destination) = (route.origin.id, route.destination.id);

        if !graph.contains_vertex(origin) || !graph.contains_vertex(destination) {
            skipped_routes += 1;
            continue;
        }

        if origin == destination {
            skipped_routes += 1;
            continue;
        }

        if !graph.add_or_accumulate_edge(origin, destination, u64::from(route.flight_count)) {
            merged_routes += 1;
        }
    }

    debug!(
        threshold,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        merged_routes,
        skipped_routes,
        "built flight graph"
    );

    graph
}
