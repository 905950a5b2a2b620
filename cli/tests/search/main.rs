use clap::Parser;
use flightnet::Args;
use flightnet::search::{create_search_request, execute_pathfinding_search, find_best_airport_match};
use flightnet_core::{
    Airport, AirportRegistry, FlightGraph, FlightNetError, NameLookup, Route, build_graph,
    build_name_lookup,
};
use std::sync::Arc;

fn registry() -> AirportRegistry {
    AirportRegistry::from_airports(vec![
        Airport::new(1, "SPI", "Springfield"),
        Airport::new(2, "SGF", "Springfield"),
        Airport::new(3, "ORD", "O'Hare International"),
        Airport::new(4, "MDW", "Midway"),
    ])
}

fn unconnected_graph(registry: &AirportRegistry) -> FlightGraph {
    let airports: Vec<Arc<Airport>> = registry.iter().cloned().collect();
    build_graph(0, |_| airports, Vec::<Route>::new)
}

fn args() -> Args {
    Args::parse_from(["flightnet", "SPI", "ORD"])
}

#[test]
fn test_unique_name_match() {
    let registry = registry();
    let lookup = build_name_lookup(&registry);
    let graph = unconnected_graph(&registry);

    assert_eq!(find_best_airport_match("o'hare international", &lookup, &registry, &graph).unwrap(), 3);
    assert_eq!(find_best_airport_match("mdw", &lookup, &registry, &graph).unwrap(), 4);
}

#[test]
fn test_shared_name_defaults_to_first_candidate() {
    let registry = registry();
    let lookup = build_name_lookup(&registry);
    let graph = unconnected_graph(&registry);

    assert_eq!(find_best_airport_match("SPRINGFIELD", &lookup, &registry, &graph).unwrap(), 1);
}

#[test]
fn test_iata_code_disambiguates() {
    let registry = registry();
    let mut lookup = build_name_lookup(&registry);
    let graph = unconnected_graph(&registry);
    // Force a collision between a name key and a code key
    lookup.insert("sgf".to_string(), vec![1, 2]);

    assert_eq!(find_best_airport_match("SGF", &lookup, &registry, &graph).unwrap(), 2);
}

#[test]
fn test_missing_airport() {
    let registry = registry();
    let lookup = build_name_lookup(&registry);
    let graph = unconnected_graph(&registry);

    let result = find_best_airport_match("Atlantis", &lookup, &registry, &graph);
    assert!(matches!(result, Err(FlightNetError::AirportNotFound(name)) if name == "Atlantis"));

    let mut empty_entry = NameLookup::default();
    empty_entry.insert("ghost".to_string(), vec![]);
    assert!(find_best_airport_match("ghost", &empty_entry, &registry, &graph).is_err());
}

#[test]
fn test_search_request_and_execution() {
    let registry = registry();
    let lookup = build_name_lookup(&registry);
    let airports: Vec<Arc<Airport>> = registry.iter().cloned().collect();
    let spi = Arc::clone(registry.get(1).unwrap());
    let mdw = Arc::clone(registry.get(4).unwrap());
    let ord = Arc::clone(registry.get(3).unwrap());

    let graph = build_graph(
        0,
        |_| airports,
        || vec![Route::new(spi, Arc::clone(&mdw), 4), Route::new(mdw, ord, 9)],
    );

    let request = create_search_request(args(), "SPI", "ORD", &lookup, &registry, &graph).unwrap();
    assert_eq!(request.from_airport, 1);
    assert_eq!(request.to_airport, 3);
    assert_eq!(request.to_name, "O'Hare International");

    let result = execute_pathfinding_search(request, &graph).unwrap();
    let path: Vec<(u32, u64)> = result
        .path
        .unwrap()
        .iter()
        .map(|(airport, flights)| (airport.id, *flights))
        .collect();
    assert_eq!(path, vec![(1, 0), (4, 4), (3, 9)]);
    assert_eq!(result.airports_visited, 3);
}

#[test]
fn test_search_for_filtered_airport_fails() {
    let registry = registry();
    let lookup = build_name_lookup(&registry);
    let spi = Arc::clone(registry.get(1).unwrap());

    let graph = build_graph(0, |_| vec![spi], Vec::<Route>::new);

    let request = create_search_request(args(), "SPI", "ORD", &lookup, &registry, &graph).unwrap();
    let result = execute_pathfinding_search(request, &graph);
    assert!(matches!(result, Err(FlightNetError::UnknownAirport(3))));
}

#[test]
fn test_shared_name_prefers_airport_in_graph() {
    let registry = AirportRegistry::from_airports(vec![
        Airport::new(1, "SPI", "Springfield"),
        Airport::new(2, "SGF", "Springfield"),
        Airport::new(3, "ORD", "O'Hare International"),
    ]);
    let lookup = build_name_lookup(&registry);
    let sgf = Arc::clone(registry.get(2).unwrap());
    let ord = Arc::clone(registry.get(3).unwrap());

    let graph = build_graph(
        1,
        |_| vec![Arc::clone(&sgf), Arc::clone(&ord)],
        || vec![Route::new(Arc::clone(&sgf), Arc::clone(&ord), 3)],
    );

    assert_eq!(find_best_airport_match("Springfield", &lookup, &registry, &graph).unwrap(), 2);

    let request =
        create_search_request(args(), "Springfield", "O'Hare International", &lookup, &registry, &graph)
            .unwrap();
    assert_eq!(request.from_airport, 2);

    let result = execute_pathfinding_search(request, &graph).unwrap();
    let path: Vec<u32> = result.path.unwrap().iter().map(|(airport, _)| airport.id).collect();
    assert_eq!(path, vec![2, 3]);
}

#[test]
fn test_exact_code_wins_among_airports_in_graph() {
    let registry = registry();
    let mut lookup = build_name_lookup(&registry);
    lookup.insert("sgf".to_string(), vec![1, 2]);
    let spi = Arc::clone(registry.get(1).unwrap());

    // Only SPI is in the graph, so it wins even though SGF matches the code exactly
    let graph = build_graph(0, |_| vec![spi], Vec::<Route>::new);

    assert_eq!(find_best_airport_match("SGF", &lookup, &registry, &graph).unwrap(), 1);
}
