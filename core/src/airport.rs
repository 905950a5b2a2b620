use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub type AirportId = u32;

/// An airport as loaded from the flight records.
///
/// Identity is the numeric id; listing order is by name with the id as a
/// tie-breaker so that two airports sharing a name still sort deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub id: AirportId,
    pub iata_code: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub timezone_offset: f64,
}

impl Airport {
    pub fn new(id: AirportId, iata_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            iata_code: iata_code.into(),
            name: name.into(),
            city: String::new(),
            state: String::new(),
            country: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            timezone_offset: 0.0,
        }
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Airport {}

impl Hash for Airport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Airport {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Airport {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airline {
    pub id: u32,
    pub iata_code: String,
    pub name: String,
}

/// Aggregated flight activity between two airports.
#[derive(Debug, Clone)]
pub struct Route {
    pub origin: Arc<Airport>,
    pub destination: Arc<Airport>,
    pub flight_count: u32,
}

impl Route {
    pub fn new(origin: Arc<Airport>, destination: Arc<Airport>, flight_count: u32) -> Self {
        Self {
            origin,
            destination,
            flight_count,
        }
    }
}

/// Read-only id -> airport table, built once when the records are loaded.
#[derive(Debug, Default)]
pub struct AirportRegistry {
    airports: FxHashMap<AirportId, Arc<Airport>>,
}

impl AirportRegistry {
    pub fn from_airports(airports: impl IntoIterator<Item = Airport>) -> Self {
        let airports = airports
            .into_iter()
            .map(|airport| (airport.id, Arc::new(airport)))
            .collect();
        Self { airports }
    }

    pub fn get(&self, id: AirportId) -> Option<&Arc<Airport>> {
        self.airports.get(&id)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Airport>> {
        self.airports.values()
    }
}
