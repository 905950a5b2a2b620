use flightnet_core::{Airport, AirportRegistry, FlightNetError, NameLookup, build_name_lookup, find_airport_id};

fn registry() -> AirportRegistry {
    AirportRegistry::from_airports(vec![
        Airport::new(1, "ZRH", "Zürich Airport"),
        Airport::new(2, "JFK", "John F. Kennedy International"),
        Airport::new(3, "LGA", "LaGuardia"),
    ])
}

#[test]
fn test_find_airport_by_name_variations() {
    let lookup = build_name_lookup(&registry());

    assert_eq!(find_airport_id("LaGuardia", &lookup).unwrap(), 3);
    assert_eq!(find_airport_id("LAGUARDIA", &lookup).unwrap(), 3);
    assert_eq!(find_airport_id("  john  f.  kennedy international ", &lookup).unwrap(), 2);
    assert_eq!(find_airport_id("\tlaguardia\t", &lookup).unwrap(), 3);
}

#[test]
fn test_find_airport_unicode_normalization() {
    let lookup = build_name_lookup(&registry());

    assert_eq!(find_airport_id("Zurich Airport", &lookup).unwrap(), 1);
    assert_eq!(find_airport_id("ZÜRICH AIRPORT", &lookup).unwrap(), 1);
}

#[test]
fn test_find_airport_by_iata_code() {
    let lookup = build_name_lookup(&registry());

    assert_eq!(find_airport_id("jfk", &lookup).unwrap(), 2);
    assert_eq!(find_airport_id("ZRH", &lookup).unwrap(), 1);
}

#[test]
fn test_shared_name_resolves_to_lowest_id() {
    let registry = AirportRegistry::from_airports(vec![
        Airport::new(8, "SPI", "Springfield"),
        Airport::new(5, "SGF", "Springfield"),
    ]);
    let lookup = build_name_lookup(&registry);

    assert_eq!(lookup["springfield"], vec![5, 8]);
    assert_eq!(find_airport_id("Springfield", &lookup).unwrap(), 5);
}

#[test]
fn test_find_airport_not_found_message() {
    let lookup = build_name_lookup(&registry());

    let result = find_airport_id("Nonexistent Field", &lookup);
    assert!(matches!(&result, Err(FlightNetError::AirportNotFound(name)) if name == "Nonexistent Field"));
    assert!(result.unwrap_err().to_string().contains("Airport 'Nonexistent Field' not found"));
}

#[test]
fn test_find_airport_empty_lookup() {
    let lookup = NameLookup::default();

    assert!(find_airport_id("Any Airport", &lookup).is_err());
    assert!(find_airport_id("", &lookup).is_err());
}
