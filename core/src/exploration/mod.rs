pub mod bfs;

pub use bfs::reachable_airports;

use crate::airport::Airport;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ExplorationResult {
    pub center: Arc<Airport>,
    /// Reachable airports other than the center, ordered by hop distance then airport order.
    pub reachable: Vec<(Arc<Airport>, usize)>,
    pub stats: ExplorationStats,
}

#[derive(Debug, Clone)]
pub struct ExplorationStats {
    pub airports_visited: usize,
    pub duration_ms: u64,
}

impl ExplorationResult {
    pub fn new(
        center: Arc<Airport>,
        mut reachable: Vec<(Arc<Airport>, usize)>,
        airports_visited: usize,
        duration_ms: u64,
    ) -> Self {
        reachable.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        Self {
            center,
            reachable,
            stats: ExplorationStats {
                airports_visited,
                duration_ms,
            },
        }
    }

    pub fn total_reachable(&self) -> usize {
        self.reachable.len()
    }

    pub fn max_hops(&self) -> usize {
        self.reachable.iter().map(|(_, hops)| *hops).max().unwrap_or(0)
    }
}
