//! Transport Optimizer Library
//!
//! A small transportation network of cities and bidirectional routes with
//! shortest-route search and ticket booking. The core lives in [`network`];
//! [`seed`] and [`menu`] are the file and console front ends.

pub mod menu;
pub mod network;
pub mod seed;
