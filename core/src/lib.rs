pub mod airport;
pub mod dataset;
pub mod error;
pub mod exploration;
pub mod graph;
pub mod lookup;
pub mod network;
pub mod pathfinding;
pub mod string_normalization;

// Re-export commonly used items
pub use airport::{Airline, Airport, AirportId, AirportRegistry, Route};
pub use dataset::{Flight, FlightDatabase, FlightDataset};
pub use error::{FlightNetError, Result};
pub use exploration::{ExplorationResult, reachable_airports};
pub use graph::{FlightGraph, build_graph};
pub use lookup::{NameLookup, build_name_lookup, find_airport_id};
pub use network::FlightNetwork;
pub use pathfinding::{PathResult, PathStep, bfs_find_path};
