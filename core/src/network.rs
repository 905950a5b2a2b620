use crate::airport::{Airport, AirportId};
use crate::dataset::FlightDatabase;
use crate::error::{FlightNetError, Result};
use crate::graph::{FlightGraph, build_graph};
use crate::pathfinding::bfs_find_path;
use std::sync::Arc;
use tracing::info;

/// Owns the flight records and the most recently built graph.
///
/// A rebuild computes the whole graph before replacing the published one, so
/// graphs handed out earlier stay readable but no longer reflect the network.
pub struct FlightNetwork {
    database: FlightDatabase,
    graph: Option<Arc<FlightGraph>>,
    threshold: Option<u32>,
}

impl FlightNetwork {
    pub fn new(database: FlightDatabase) -> Self {
        Self {
            database,
            graph: None,
            threshold: None,
        }
    }

    pub fn database(&self) -> &FlightDatabase {
        &self.database
    }

    /// Rebuilds the graph over airports served by at least `min_airlines` airlines.
    pub fn rebuild(&mut self, min_airlines: u32) -> Arc<FlightGraph> {
        let database = &self.database;
        let graph = Arc::new(build_graph(
            min_airlines,
            |x| database.airports_served_by_at_least(x),
            || database.aggregated_routes(),
        ));

        info!(
            min_airlines,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "flight network rebuilt"
        );

        self.graph = Some(Arc::clone(&graph));
        self.threshold = Some(min_airlines);
        graph
    }

    pub fn graph(&self) -> Result<Arc<FlightGraph>> {
        self.graph.clone().ok_or(FlightNetError::GraphNotBuilt)
    }

    /// Threshold used by the last rebuild.
    pub fn threshold(&self) -> Option<u32> {
        self.threshold
    }

    pub fn vertex_count(&self) -> Result<usize> {
        Ok(self.current_graph()?.vertex_count())
    }

    pub fn edge_count(&self) -> Result<usize> {
        Ok(self.current_graph()?.edge_count())
    }

    pub fn sorted_vertices(&self) -> Result<Vec<Arc<Airport>>> {
        Ok(self.current_graph()?.sorted_vertices())
    }

    /// Airports on a shortest hop path from `source` to `target`, or `None`
    /// when they sit in different components.
    pub fn find_path(&self, source: AirportId, target: AirportId) -> Result<Option<Vec<Arc<Airport>>>> {
        let (path, _, _) = bfs_find_path(self.current_graph()?, source, target)?;
        Ok(path.map(|steps| steps.into_iter().map(|(airport, _)| airport).collect()))
    }

    fn current_graph(&self) -> Result<&FlightGraph> {
        self.graph.as_deref().ok_or(FlightNetError::GraphNotBuilt)
    }
}
