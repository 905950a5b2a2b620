use flightnet_core::string_normalization::clean_str;
use flightnet_core::{AirportId, AirportRegistry, FlightGraph, FlightNetError, NameLookup, PathStep, bfs_find_path};

use crate::args::Args;

pub struct SearchRequest {
    pub from_airport: AirportId,
    pub to_airport: AirportId,
    pub from_name: String,
    pub to_name: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub path: Option<Vec<PathStep>>,
    pub airports_visited: usize,
    pub search_duration: f64,
    pub from_name: String,
    pub to_name: String,
    pub display_options: Args,
}

/// Resolves a user query to an airport id. When several airports share the
/// cleaned name, airports present in `graph` win first, then an exact IATA
/// code or name match, then the lowest id.
pub fn find_best_airport_match(
    query: &str,
    name_lookup: &NameLookup,
    registry: &AirportRegistry,
    graph: &FlightGraph,
) -> Result<AirportId, FlightNetError> {
    let trimmed_query = query.trim();
    let not_found = || FlightNetError::AirportNotFound(query.to_string());

    let airport_ids = name_lookup.get(&clean_str(query)).ok_or_else(not_found)?;

    let in_graph: Vec<AirportId> = airport_ids
        .iter()
        .copied()
        .filter(|&id| graph.contains_vertex(id))
        .collect();
    let candidates = if in_graph.is_empty() { airport_ids.as_slice() } else { in_graph.as_slice() };

    let is_exact = |id: AirportId| {
        registry.get(id).is_some_and(|airport| {
            airport.iata_code.eq_ignore_ascii_case(trimmed_query)
                || airport.name.to_lowercase() == trimmed_query.to_lowercase()
        })
    };

    candidates
        .iter()
        .copied()
        .find(|&id| is_exact(id))
        .or_else(|| candidates.iter().copied().min())
        .ok_or_else(not_found)
}

pub fn create_search_request(
    args: Args,
    from: &str,
    to: &str,
    name_lookup: &NameLookup,
    registry: &AirportRegistry,
    graph: &FlightGraph,
) -> Result<SearchRequest, FlightNetError> {
    let from_airport = find_best_airport_match(from, name_lookup, registry, graph)?;
    let to_airport = find_best_airport_match(to, name_lookup, registry, graph)?;

    let airport_name = |id: AirportId| {
        registry
            .get(id)
            .map(|airport| airport.name.clone())
            .unwrap_or_default()
    };

    Ok(SearchRequest {
        from_airport,
        to_airport,
        from_name: airport_name(from_airport),
        to_name: airport_name(to_airport),
        search_args: args,
    })
}

pub fn execute_pathfinding_search(
    request: SearchRequest,
    graph: &FlightGraph,
) -> Result<SearchResult, FlightNetError> {
    let (path, visited_count, elapsed_time) =
        bfs_find_path(graph, request.from_airport, request.to_airport)?;

    Ok(SearchResult {
        path,
        airports_visited: visited_count,
        search_duration: elapsed_time,
        from_name: request.from_name,
        to_name: request.to_name,
        display_options: request.search_args,
    })
}
