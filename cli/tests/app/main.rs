use flightnet::FlightNetApp;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_dataset() -> NamedTempFile {
    let dataset = json!({
        "airports": [
            { "id": 1, "iata_code": "SEA", "name": "Seattle-Tacoma International" },
            { "id": 2, "iata_code": "PDX", "name": "Portland International" },
            { "id": 3, "iata_code": "GEG", "name": "Spokane International" }
        ],
        "airlines": [
            { "id": 1, "iata_code": "AS", "name": "Alaska Airlines" }
        ],
        "flights": [
            { "id": 1, "airline_id": 1, "origin_airport_id": 1, "destination_airport_id": 2 },
            { "id": 2, "airline_id": 1, "origin_airport_id": 2, "destination_airport_id": 1 }
        ]
    });

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", dataset).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_missing_data_path_is_rejected() {
    let result = FlightNetApp::new(Some(PathBuf::from("/nonexistent/flights.json")));

    let message = result.err().unwrap().to_string();
    assert!(message.contains("Flight data not found"));
}

#[test]
fn test_load_network_from_file() {
    let file = write_dataset();
    let app = FlightNetApp::new(Some(file.path().to_path_buf())).unwrap();

    let (mut network, name_lookup) = app.load_network().unwrap();
    let graph = network.rebuild(1);

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(1, 2), Some(2));
    assert_eq!(name_lookup["pdx"], vec![2]);
    assert_eq!(name_lookup["spokane international"], vec![3]);
}
