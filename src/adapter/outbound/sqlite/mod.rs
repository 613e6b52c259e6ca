//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed order store using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteOrderStore;
