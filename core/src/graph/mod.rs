pub mod builder;

use crate::airport::{Airport, AirportId};
use rustc_hash::FxHashMap;
use std::sync::Arc;

pub use builder::build_graph;

type EdgeKey = (AirportId, AirportId);

fn edge_key(a: AirportId, b: AirportId) -> EdgeKey {
    if a <= b { (a, b) } else { (b, a) }
}

/// Simple undirected weighted graph over a filtered set of airports.
///
/// Adjacency lists keep neighbors in edge insertion order; weights are stored
/// once per unordered pair.
#[derive(Debug, Default)]
pub struct FlightGraph {
    vertices: FxHashMap<AirportId, Arc<Airport>>,
    adjacency: FxHashMap<AirportId, Vec<AirportId>>,
    weights: FxHashMap<EdgeKey, u64>,
}

impl FlightGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_vertex(&mut self, airport: Arc<Airport>) {
        self.adjacency.entry(airport.id).or_default();
        self.vertices.insert(airport.id, airport);
    }

    /// Creates the edge or adds `flight_count` to its weight. Returns true when
    /// a new edge was created. Both endpoints must already be distinct vertices.
    pub(crate) fn add_or_accumulate_edge(
        &mut self,
        a: AirportId,
        b: AirportId,
        flight_count: u64,
    ) -> bool {
        if let Some(weight) = self.weights.get_mut(&edge_key(a, b)) {
            *weight += flight_count;
            return false;
        }

        self.weights.insert(edge_key(a, b), flight_count);
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        true
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    pub fn contains_vertex(&self, id: AirportId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: AirportId) -> Option<&Arc<Airport>> {
        self.vertices.get(&id)
    }

    /// All vertices ordered by airport name, then id.
    pub fn sorted_vertices(&self) -> Vec<Arc<Airport>> {
        let mut vertices: Vec<Arc<Airport>> = self.vertices.values().cloned().collect();
        vertices.sort();
        vertices
    }

    pub fn edge_weight(&self, a: AirportId, b: AirportId) -> Option<u64> {
        self.weights.get(&edge_key(a, b)).copied()
    }

    /// Neighbors of `id` with the weight of the connecting edge, in insertion order.
    pub fn neighbors(&self, id: AirportId) -> impl Iterator<Item = (AirportId, u64)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flatten()
            .map(move |&neighbor| (neighbor, self.weights[&edge_key(id, neighbor)]))
    }

    /// Every edge once, as (smaller id, larger id, weight).
    pub fn edges(&self) -> impl Iterator<Item = (AirportId, AirportId, u64)> + '_ {
        self.weights.iter().map(|(&(a, b), &weight)| (a, b, weight))
    }
}
