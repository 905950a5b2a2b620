use crate::airport::{Airline, Airport, AirportId, AirportRegistry, Route};
use crate::error::{FlightNetError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// One operated flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: u64,
    pub airline_id: u32,
    pub origin_airport_id: AirportId,
    pub destination_airport_id: AirportId,
}

/// Raw records as stored in a flight data file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FlightDataset {
    #[serde(default)]
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub airlines: Vec<Airline>,
    #[serde(default)]
    pub flights: Vec<Flight>,
}

/// Loaded flight records: the airport registry plus the raw flights the
/// vertex set and routes are derived from.
#[derive(Debug)]
pub struct FlightDatabase {
    registry: Arc<AirportRegistry>,
    airlines: FxHashMap<u32, Airline>,
    flights: Vec<Flight>,
}

impl FlightDatabase {
    pub fn from_dataset(dataset: FlightDataset) -> Self {
        let registry = Arc::new(AirportRegistry::from_airports(dataset.airports));
        let airlines = dataset
            .airlines
            .into_iter()
            .map(|airline| (airline.id, airline))
            .collect();

        Self {
            registry,
            airlines,
            flights: dataset.flights,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| FlightNetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: FlightDataset = serde_json::from_str(&contents)?;

        debug!(
            path = %path.display(),
            airports = dataset.airports.len(),
            airlines = dataset.airlines.len(),
            flights = dataset.flights.len(),
            "loaded flight data"
        );

        Ok(Self::from_dataset(dataset))
    }

    pub fn registry(&self) -> &Arc<AirportRegistry> {
        &self.registry
    }

    pub fn airline(&self, id: u32) -> Option<&Airline> {
        self.airlines.get(&id)
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Airports where at least `min_airlines` distinct airlines operate a
    /// departing or arriving flight. With `min_airlines == 0` every airport qualifies.
    pub fn airports_served_by_at_least(&self, min_airlines: u32) -> Vec<Arc<Airport>> {
        let mut carriers: FxHashMap<AirportId, FxHashSet<u32>> = FxHashMap::default();

        for flight in &self.flights {
            carriers
                .entry(flight.origin_airport_id)
                .or_default()
                .insert(flight.airline_id);
            carriers
                .entry(flight.destination_airport_id)
                .or_default()
                .insert(flight.airline_id);
        }

        self.registry
            .iter()
            .filter(|airport| {
                let served_by = carriers.get(&airport.id).map_or(0, |set| set.len());
                served_by >= min_airlines as usize
            })
            .cloned()
            .collect()
    }

    /// One route per directed (origin, destination) pair, in order of first
    /// appearance. Flights touching unknown airports are dropped.
    pub fn aggregated_routes(&self) -> Vec<Route> {
        let mut pair_index: FxHashMap<(AirportId, AirportId), usize> = FxHashMap::default();
        let mut routes: Vec<Route> = Vec::new();
        let mut unknown_airport_flights = 0usize;

        for flight in &self.flights {
            let (Some(origin), Some(destination)) = (
                self.registry.get(flight.origin_airport_id),
                self.registry.get(flight.destination_airport_id),
            ) else {
                unknown_airport_flights += 1;
                continue;
            };

            let pair = (origin.id, destination.id);
            match pair_index.get(&pair) {
                Some(&index) => routes[index].flight_count += 1,
                None => {
                    pair_index.insert(pair, routes.len());
                    routes.push(Route::new(Arc::clone(origin), Arc::clone(destination), 1));
                }
            }
        }

        if unknown_airport_flights > 0 {
            warn!(
                skipped = unknown_airport_flights,
                "flights reference airports missing from the airport table"
            );
        }

        routes
    }
}
