use flightnet_core::{Airport, ExplorationResult, FlightGraph};
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub graph: JsonGraph,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airports: Option<Vec<JsonAirport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<JsonSearch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachable: Option<Vec<JsonReachable>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonGraph {
    pub min_airlines: u32,
    pub airports: usize,
    pub routes: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonAirport {
    pub id: u32,
    pub iata_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights_from_previous: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonSearch {
    pub from: String,
    pub to: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonAirport>>,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub airports_explored: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonReachable {
    pub airport: JsonAirport,
    pub hops: usize,
}

impl JsonAirport {
    fn from_airport(airport: &Airport, flights_from_previous: Option<u64>) -> Self {
        Self {
            id: airport.id,
            iata_code: airport.iata_code.clone(),
            name: airport.name.clone(),
            flights_from_previous,
        }
    }
}

pub fn create_json_output(
    graph: &FlightGraph,
    args: &Args,
    search_result: Option<&SearchResult>,
    exploration: Option<&ExplorationResult>,
) -> JsonOutput {
    let airports = args.list.then(|| {
        graph
            .sorted_vertices()
            .iter()
            .map(|airport| JsonAirport::from_airport(airport, None))
            .collect()
    });

    let search = search_result.map(|result| {
        let path = result.path.as_ref().map(|path| {
            path.iter()
                .enumerate()
                .map(|(i, (airport, flights))| {
                    JsonAirport::from_airport(airport, if i > 0 { Some(*flights) } else { None })
                })
                .collect()
        });

        JsonSearch {
            from: result.from_name.clone(),
            to: result.to_name.clone(),
            found: result.path.is_some(),
            path,
            stats: JsonStats {
                search_time_ms: (result.search_duration * 1000.0) as u64,
                airports_explored: result.airports_visited,
            },
        }
    });

    let reachable = exploration.map(|exploration| {
        exploration
            .reachable
            .iter()
            .map(|(airport, hops)| JsonReachable {
                airport: JsonAirport::from_airport(airport, None),
                hops: *hops,
            })
            .collect()
    });

    JsonOutput {
        graph: JsonGraph {
            min_airlines: args.min_airlines,
            airports: graph.vertex_count(),
            routes: graph.edge_count(),
        },
        airports,
        search,
        reachable,
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
