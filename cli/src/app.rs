use std::{error::Error, path::PathBuf};
use flightnet_core::{FlightDatabase, FlightNetwork, NameLookup, build_name_lookup};
use tracing::debug;

pub struct FlightNetApp {
    pub data_path: PathBuf,
}

impl FlightNetApp {
    pub fn new(data_path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let data_path = match data_path {
            Some(path) => path,
            None => default_data_path()?,
        };

        if !data_path.exists() {
            return Err(format!(
                "Flight data not found at {:?}. Pass --data or set FLIGHTNET_DATA",
                data_path
            )
            .into());
        }

        debug!(path = %data_path.display(), "using flight data file");
        Ok(Self { data_path })
    }

    pub fn load_network(&self) -> Result<(FlightNetwork, NameLookup), Box<dyn Error>> {
        let database = FlightDatabase::load(&self.data_path)?;
        let name_lookup = build_name_lookup(database.registry());
        debug!(
            airports = database.registry().len(),
            flights = database.flight_count(),
            lookup_keys = name_lookup.len(),
            "flight data ready"
        );
        Ok((FlightNetwork::new(database), name_lookup))
    }
}

pub fn default_data_path() -> Result<PathBuf, Box<dyn Error>> {
    let data_dir = dirs::data_dir().ok_or("Could not find data directory")?;
    Ok(data_dir.join("flightnet").join("flights.json"))
}
