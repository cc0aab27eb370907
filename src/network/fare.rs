//! Ticket pricing for direct routes

use super::error::{NetworkError, Result};
use super::graph::CityGraph;
use super::types::CityId;

/// Base fare charged per kilometer of the direct route
pub const BASE_FARE_PER_KM: u64 = 10;

/// Combined population that adds one unit of demand surcharge
pub const DEMAND_SURCHARGE_POPULATION: u64 = 1_000_000;

/// Prices a trip over the direct route between two cities
///
/// Only a direct route counts; multi-hop connections are not priced.
/// When parallel routes exist the first one added is used.
pub fn calculate_fare(graph: &CityGraph, source: CityId, destination: CityId) -> Result<u64> {
    let source_city = graph
        .get_city_by_id(source)
        .ok_or(NetworkError::UnknownCity(source))?;
    let destination_city = graph
        .get_city_by_id(destination)
        .ok_or(NetworkError::UnknownCity(destination))?;

    let route = graph
        .get_route(source, destination)
        .ok_or(NetworkError::NoDirectRoute {
            from: source,
            to: destination,
        })?;

    let base_fare = u64::from(route.distance) * BASE_FARE_PER_KM;
    // Summed in u128; the quotient is at most 2 * u64::MAX / 10^6
    let combined =
        u128::from(source_city.population()) + u128::from(destination_city.population());
    let demand_surcharge = (combined / u128::from(DEMAND_SURCHARGE_POPULATION)) as u64;

    Ok(base_fare + demand_surcharge)
}
