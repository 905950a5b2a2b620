use super::super::utils::{ParentMap, reconstruct_path};
use crate::airport::AirportId;
use crate::graph::FlightGraph;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

pub struct BfsState {
    start: AirportId,
    queue: VecDeque<AirportId>,
    pub visited: FxHashSet<AirportId>,
    parent_map: ParentMap,
}

impl BfsState {
    pub fn new(start: AirportId) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            start,
            queue,
            visited,
            parent_map: ParentMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: AirportId, current: AirportId, weight: u64) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, (current, weight));
            self.queue.push_back(neighbor);
        }
    }

    pub fn find_path_to_target(
        &mut self,
        target: AirportId,
        graph: &FlightGraph,
    ) -> Option<Vec<(AirportId, u64)>> {
        while let Some(current_airport) = self.queue.pop_front() {
            if current_airport == target {
                return Some(reconstruct_path(&self.parent_map, self.start, target));
            }

            for (neighbor, weight) in graph.neighbors(current_airport) {
                self.visit_neighbor(neighbor, current_airport, weight);
            }
        }

        None
    }
}
