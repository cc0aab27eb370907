use thiserror::Error;

use super::types::{CityId, TicketId};

/// Failures reported by the graph, path, fare and ticket operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The identifier is not registered in the graph
    #[error("City {0} not found")]
    UnknownCity(CityId),

    /// A city with this identifier is already registered
    #[error("City {0} already exists")]
    DuplicateCity(CityId),

    /// Every city identifier is already taken
    #[error("No free city id left")]
    CityIdsExhausted,

    /// Fare lookup between two cities with no direct edge
    #[error("No route found between city {from} and city {to}")]
    NoDirectRoute { from: CityId, to: CityId },

    /// Deletion of a ticket id that is not in the ledger
    #[error("Ticket {0} not found")]
    TicketNotFound(TicketId),

    /// No path connects the two cities
    #[error("City {end} is not reachable from city {start}")]
    Unreachable { start: CityId, end: CityId },
}

pub type Result<T> = std::result::Result<T, NetworkError>;
