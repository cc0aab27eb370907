//! Ticket records and the ledger that issues them

use chrono::{DateTime, Utc};
use std::fmt;

use super::error::{NetworkError, Result};
use super::types::{City, CityId, TicketId};

/// A booked ticket between two cities
#[derive(Debug, Clone)]
pub struct Ticket {
    id: TicketId,
    source: City,
    destination: City,
    fare: u64,
    booked_at: DateTime<Utc>,
}

impl Ticket {
    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn source(&self) -> &City {
        &self.source
    }

    pub fn destination(&self) -> &City {
        &self.destination
    }

    pub fn fare(&self) -> u64 {
        self.fare
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }

    /// Whether the ticket starts or ends at the given city
    pub fn involves(&self, city: CityId) -> bool {
        self.source.id() == city || self.destination.id() == city
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket ID: {}, From: {}, To: {}, Fare: ${}, Date: {}",
            self.id,
            self.source.name(),
            self.destination.name(),
            self.fare,
            self.booked_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Booked tickets in booking order
///
/// Ids start at 1 and are never handed out twice by the same ledger, even
/// after the ticket holding one is deleted.
#[derive(Debug)]
pub struct TicketLedger {
    tickets: Vec<Ticket>,
    next_id: u64,
}

impl Default for TicketLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketLedger {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_id: 1,
        }
    }

    fn next_ticket_id(&mut self) -> TicketId {
        let id = TicketId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Issues a ticket with the next id and the current time
    pub fn issue(&mut self, source: City, destination: City, fare: u64) -> &Ticket {
        let ticket = Ticket {
            id: self.next_ticket_id(),
            source,
            destination,
            fare,
            booked_at: Utc::now(),
        };
        self.tickets.push(ticket);
        &self.tickets[self.tickets.len() - 1]
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    /// Deletes a ticket by id
    pub fn delete(&mut self, id: TicketId) -> Result<Ticket> {
        let index = self
            .tickets
            .iter()
            .position(|ticket| ticket.id == id)
            .ok_or(NetworkError::TicketNotFound(id))?;
        Ok(self.tickets.remove(index))
    }

    /// Gets all tickets by fare, highest first
    /// Tickets with equal fares stay in booking order
    pub fn list(&self) -> Vec<&Ticket> {
        let mut sorted: Vec<&Ticket> = self.tickets.iter().collect();
        sorted.sort_by(|a, b| b.fare.cmp(&a.fare));
        sorted
    }

    /// Removes every ticket starting or ending at a city
    /// Returns the number of tickets removed
    pub fn remove_for_city(&mut self, city: CityId) -> usize {
        let before = self.tickets.len();
        self.tickets.retain(|ticket| !ticket.involves(city));
        before - self.tickets.len()
    }

    /// Iterates tickets in booking order
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
