//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the command-line frontend
//! - [`outbound`] - Driven side: the SQLite order store

pub mod inbound;
pub mod outbound;
