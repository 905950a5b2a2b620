use crate::airport::AirportId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlightNetError {
    /// A query named an airport that is not a vertex of the current graph
    #[error("airport {0} is not part of the current graph")]
    UnknownAirport(AirportId),

    #[error("graph has not been built yet, call rebuild first")]
    GraphNotBuilt,

    #[error("Airport '{0}' not found in database")]
    AirportNotFound(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid flight data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlightNetError>;
