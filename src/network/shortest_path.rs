//! Single-source shortest paths over the city graph
//!
//! Dijkstra with a binary heap. Improved labels are pushed again instead of
//! decreasing the key in place; stale heap entries are skipped on pop.
//! Written out rather than using petgraph's `astar`, which stops at the goal
//! and works on petgraph graphs instead of the insertion-ordered `CityGraph`.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::error::{NetworkError, Result};
use super::graph::CityGraph;
use super::types::CityId;

/// A minimum-distance path between two cities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Cities to traverse, including start and end
    pub cities: Vec<CityId>,
    /// Total distance in kilometers
    pub distance: u64,
}

/// Finds the minimum-distance path from `start` to `end`
///
/// Distances to every city reachable from `start` are settled before the
/// path to `end` is extracted. Among equally short paths the winner is
/// whichever the heap pops first.
pub fn find_shortest_route(graph: &CityGraph, start: CityId, end: CityId) -> Result<ShortestPath> {
    for city in [start, end] {
        if !graph.contains_city(city) {
            return Err(NetworkError::UnknownCity(city));
        }
    }

    let mut distances: HashMap<CityId, u64> = HashMap::new();
    let mut predecessors: HashMap<CityId, CityId> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    distances.insert(start, 0);
    frontier.push(Reverse((0u64, start)));

    while let Some(Reverse((current_distance, current))) = frontier.pop() {
        if distances
            .get(&current)
            .is_some_and(|&best| current_distance > best)
        {
            continue;
        }

        for route in graph.get_routes_from_city(current)? {
            let neighbor = route.destination;
            let candidate = current_distance + u64::from(route.distance);

            let improves = distances
                .get(&neighbor)
                .map_or(true, |&known| candidate < known);
            if improves {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, current);
                frontier.push(Reverse((candidate, neighbor)));
            }
        }
    }

    let mut cities = vec![end];
    let mut at = end;
    while let Some(&previous) = predecessors.get(&at) {
        cities.push(previous);
        at = previous;
    }
    cities.reverse();

    if cities.first() != Some(&start) {
        return Err(NetworkError::Unreachable { start, end });
    }

    let distance = distances
        .get(&end)
        .copied()
        .ok_or(NetworkError::Unreachable { start, end })?;

    Ok(ShortestPath { cities, distance })
}
