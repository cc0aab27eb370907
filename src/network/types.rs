//! Core types for the transport network
//!
//! Cities and the directed route records the graph stores for them.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A unique identifier for a city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub u32);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A wrapper type for ticket IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketId(pub u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A city in the network
///
/// Two cities are the same node whenever their identifiers match,
/// regardless of name or population.
#[derive(Debug, Clone)]
pub struct City {
    id: CityId,
    name: String,
    population: u64,
}

impl City {
    pub fn new(id: CityId, name: impl Into<String>, population: u64) -> Self {
        Self {
            id,
            name: name.into(),
            population,
        }
    }

    pub fn id(&self) -> CityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u64 {
        self.population
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Population : {})", self.name, self.population)
    }
}

/// A directed route record between two cities
///
/// The graph always stores routes in mirrored pairs, see
/// [`CityGraph::add_route`](super::CityGraph::add_route).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub source: CityId,
    pub destination: CityId,
    /// Length in kilometers
    pub distance: u32,
    /// Travel time in minutes
    pub time: u32,
}

impl Route {
    pub fn new(source: CityId, destination: CityId, distance: u32, time: u32) -> Self {
        Self {
            source,
            destination,
            distance,
            time,
        }
    }

    /// The mirror edge carrying the same distance and time
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination,
            destination: self.source,
            distance: self.distance,
            time: self.time,
        }
    }

    /// Whether either endpoint is the given city
    pub fn touches(&self, city: CityId) -> bool {
        self.source == city || self.destination == city
    }
}
