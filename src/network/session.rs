//! Transport session that ties the graph and the ticket ledger together
//!
//! This is the entry point for every network operation. Each session owns
//! its own graph and ledger, so independent sessions can coexist.

use log::{info, warn};
use std::fmt;

use super::error::{NetworkError, Result};
use super::fare::calculate_fare;
use super::graph::CityGraph;
use super::shortest_path::{find_shortest_route, ShortestPath};
use super::ticket::{Ticket, TicketLedger};
use super::types::{City, CityId, Route, TicketId};

/// Outcome of deleting a city
#[derive(Debug, Clone)]
pub struct CityRemoval {
    pub city: City,
    /// Tickets dropped from the ledger because they referenced the city
    pub tickets_removed: usize,
}

/// Counts describing the current session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkSummary {
    pub cities: usize,
    /// Route records, both directions counted
    pub route_records: usize,
    pub tickets: usize,
}

impl fmt::Display for NetworkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Transport Network Summary ===")?;
        writeln!(f, "Cities: {}", self.cities)?;
        writeln!(f, "Routes: {}", self.route_records / 2)?;
        write!(f, "Tickets: {}", self.tickets)
    }
}

/// The graph store and ticket ledger of one network
#[derive(Debug, Default)]
pub struct TransportSession {
    graph: CityGraph,
    ledger: TicketLedger,
}

impl TransportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    pub fn ledger(&self) -> &TicketLedger {
        &self.ledger
    }

    /// Add a city under the next free id
    pub fn add_city(&mut self, name: impl Into<String>, population: u64) -> Result<CityId> {
        let id = self
            .graph
            .next_city_id()
            .ok_or(NetworkError::CityIdsExhausted)?;
        self.insert_city(City::new(id, name, population))?;
        Ok(id)
    }

    /// Register a city under an explicit id
    pub fn insert_city(&mut self, city: City) -> Result<()> {
        let description = city.to_string();
        self.graph.add_city(city)?;
        info!("Added city {}", description);
        Ok(())
    }

    /// Add a route between two registered cities (both directions)
    pub fn add_route(
        &mut self,
        source: CityId,
        destination: CityId,
        distance: u32,
        time: u32,
    ) -> Result<()> {
        self.graph
            .add_route(Route::new(source, destination, distance, time))?;
        info!("Added route {} <-> {}", source, destination);
        Ok(())
    }

    pub fn find_shortest_route(&self, start: CityId, end: CityId) -> Result<ShortestPath> {
        find_shortest_route(&self.graph, start, end)
    }

    /// Book a ticket over the direct route between two cities
    ///
    /// Fails without issuing a ticket when either city is unknown or no
    /// direct route exists.
    pub fn book_ticket(&mut self, source: CityId, destination: CityId) -> Result<&Ticket> {
        let fare = calculate_fare(&self.graph, source, destination)?;

        let source_city = self
            .graph
            .get_city_by_id(source)
            .cloned()
            .ok_or(NetworkError::UnknownCity(source))?;
        let destination_city = self
            .graph
            .get_city_by_id(destination)
            .cloned()
            .ok_or(NetworkError::UnknownCity(destination))?;

        let ticket = self.ledger.issue(source_city, destination_city, fare);
        info!("Booked ticket {} with fare ${}", ticket.id(), fare);
        Ok(ticket)
    }

    /// Gets all tickets by fare, highest first
    pub fn list_tickets(&self) -> Vec<&Ticket> {
        self.ledger.list()
    }

    pub fn delete_ticket(&mut self, id: TicketId) -> Result<Ticket> {
        let ticket = self.ledger.delete(id)?;
        info!("Deleted ticket {}", id);
        Ok(ticket)
    }

    /// Remove a city together with its routes and tickets
    ///
    /// The ledger cleanup happens in the same call, so no ticket ever refers
    /// to a city missing from the graph.
    pub fn delete_city(&mut self, id: CityId) -> Result<CityRemoval> {
        let city = self
            .graph
            .remove_city(id)
            .ok_or(NetworkError::UnknownCity(id))?;
        let tickets_removed = self.ledger.remove_for_city(id);

        info!(
            "Deleted city {} and {} dependent tickets",
            city, tickets_removed
        );
        Ok(CityRemoval {
            city,
            tickets_removed,
        })
    }

    /// Remove the routes between two cities in both directions
    /// Returns the number of route records removed
    pub fn delete_route(&mut self, source: CityId, destination: CityId) -> Result<usize> {
        for city in [source, destination] {
            if !self.graph.contains_city(city) {
                return Err(NetworkError::UnknownCity(city));
            }
        }

        let removed = self.graph.remove_route(source, destination);
        if removed == 0 {
            warn!("No route between {} and {} to delete", source, destination);
        }
        Ok(removed)
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            cities: self.graph.city_count(),
            route_records: self.graph.route_count(),
            tickets: self.ledger.len(),
        }
    }
}
