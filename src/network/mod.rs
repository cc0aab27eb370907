//! Transport network core
//!
//! This module contains the city graph, shortest-path search, fare pricing
//! and ticket ledger. It performs no I/O, so it can be driven from the
//! console menu or straight from tests.

mod error;
mod fare;
mod graph;
mod session;
mod shortest_path;
mod ticket;
mod types;

pub use error::{NetworkError, Result};
pub use fare::{calculate_fare, BASE_FARE_PER_KM, DEMAND_SURCHARGE_POPULATION};
pub use graph::CityGraph;
pub use session::{CityRemoval, NetworkSummary, TransportSession};
pub use shortest_path::{find_shortest_route, ShortestPath};
pub use ticket::{Ticket, TicketLedger};
pub use types::{City, CityId, Route, TicketId};
