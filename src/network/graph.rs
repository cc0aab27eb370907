//! City graph for route lookups and pathfinding
//!
//! Undirected weighted graph kept as per-city adjacency lists of directed
//! route records. Every route added is stored twice, once per direction.

use log::debug;
use std::collections::{BTreeMap, HashMap};

use super::error::{NetworkError, Result};
use super::types::{City, CityId, Route};

/// Graph store owning every city and its outgoing routes
#[derive(Debug, Default)]
pub struct CityGraph {
    /// Registered cities, iterated in ascending id order
    cities: BTreeMap<CityId, City>,

    /// Outgoing route records per city, in insertion order
    adjacency: HashMap<CityId, Vec<Route>>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a city with an empty route list
    ///
    /// An identifier can only be registered once; a second city with the same
    /// id is rejected and the existing one is left untouched.
    pub fn add_city(&mut self, city: City) -> Result<()> {
        let id = city.id();
        if self.cities.contains_key(&id) {
            return Err(NetworkError::DuplicateCity(id));
        }

        debug!("Adding city {} ({})", id, city.name());
        self.cities.insert(id, city);
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    pub fn get_city_by_id(&self, id: CityId) -> Option<&City> {
        self.cities.get(&id)
    }

    pub fn contains_city(&self, id: CityId) -> bool {
        self.cities.contains_key(&id)
    }

    /// Adds a route and its mirror
    ///
    /// Parallel routes are allowed; adding the same route twice stores two
    /// records in each direction.
    pub fn add_route(&mut self, route: Route) -> Result<()> {
        for endpoint in [route.source, route.destination] {
            if !self.contains_city(endpoint) {
                return Err(NetworkError::UnknownCity(endpoint));
            }
        }

        debug!(
            "Adding route {} <-> {} ({}km, {} mins)",
            route.source, route.destination, route.distance, route.time
        );
        self.adjacency.entry(route.source).or_default().push(route);
        self.adjacency
            .entry(route.destination)
            .or_default()
            .push(route.reversed());
        Ok(())
    }

    /// Gets the outgoing routes of a city in insertion order
    pub fn get_routes_from_city(&self, id: CityId) -> Result<&[Route]> {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(NetworkError::UnknownCity(id))
    }

    /// Finds the first route from `source` to `destination` by insertion order
    pub fn get_route(&self, source: CityId, destination: CityId) -> Option<&Route> {
        self.adjacency
            .get(&source)?
            .iter()
            .find(|route| route.destination == destination)
    }

    /// Removes a city and every route touching it
    /// Returns the removed city, or None if it was not registered
    pub fn remove_city(&mut self, id: CityId) -> Option<City> {
        let city = self.cities.remove(&id)?;
        self.adjacency.remove(&id);

        // Scan every remaining list for routes into the removed city
        let mut dropped = 0;
        for routes in self.adjacency.values_mut() {
            let before = routes.len();
            routes.retain(|route| !route.touches(id));
            dropped += before - routes.len();
        }

        debug!(
            "Removed city {} ({}) and {} inbound route records",
            id,
            city.name(),
            dropped
        );
        Some(city)
    }

    /// Removes the routes between two cities in both directions
    ///
    /// Routes are only ever added and removed as mirrored pairs, so no pair
    /// can be left one-sided. A self-loop keeps both of its records in one
    /// list: the first pass removes them and the second finds nothing.
    /// Returns the number of route records removed.
    pub fn remove_route(&mut self, source: CityId, destination: CityId) -> usize {
        let mut removed = 0;

        if let Some(routes) = self.adjacency.get_mut(&source) {
            let before = routes.len();
            routes.retain(|route| route.destination != destination);
            removed += before - routes.len();
        }

        if let Some(routes) = self.adjacency.get_mut(&destination) {
            let before = routes.len();
            routes.retain(|route| route.destination != source);
            removed += before - routes.len();
        }

        debug!(
            "Removed {} route records between {} and {}",
            removed, source, destination
        );
        removed
    }

    /// Gets all cities in ascending id order
    pub fn get_cities(&self) -> Vec<&City> {
        self.cities.values().collect()
    }

    /// Get number of cities
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Get number of stored route records (both directions counted)
    pub fn route_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Id for a new city: one past the largest registered id
    ///
    /// Once `u32::MAX` is taken, falls back to the lowest free id.
    /// Returns None only when every id is in use.
    pub fn next_city_id(&self) -> Option<CityId> {
        match self.cities.keys().next_back() {
            None => Some(CityId(1)),
            Some(last) => last
                .0
                .checked_add(1)
                .or_else(|| (1..=u32::MAX).find(|id| !self.cities.contains_key(&CityId(*id))))
                .map(CityId),
        }
    }

    /// Every city in ascending id order with its outgoing routes
    pub fn routes_by_city(&self) -> Vec<(&City, &[Route])> {
        self.cities
            .values()
            .map(|city| {
                let routes = self
                    .adjacency
                    .get(&city.id())
                    .map_or(&[][..], Vec::as_slice);
                (city, routes)
            })
            .collect()
    }

    /// Renders a route using city names, e.g. `X to Y - 10km in 5 mins`
    pub fn describe_route(&self, route: &Route) -> String {
        let name = |id: CityId| {
            self.cities
                .get(&id)
                .map_or_else(|| format!("#{}", id), |city| city.name().to_string())
        };
        format!(
            "{} to {} - {}km in {} mins",
            name(route.source),
            name(route.destination),
            route.distance,
            route.time
        )
    }
}
