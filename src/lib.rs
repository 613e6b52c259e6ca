//! Pizza Shop - order entry over a relational order store.
//!
//! A counter clerk places orders made of one or more pizzas, lists every
//! order one pizza per row, and cancels an order by id. Orders live in two
//! SQLite tables, `orders` and `pizzas`, managed through Diesel.
//!
//! # Architecture
//!
//! - **`domain`** - Pizzas, order ids and the results the store returns
//! - **`port`** - The [`port::OrderStore`] trait
//! - **`adapter::outbound::sqlite`** - The SQLite implementation
//! - **`adapter::inbound::cli`** - The `pizza-shop` command line and shell
//! - **`infrastructure`** - Configuration, paths and factories
//!
//! # Example
//!
//! ```no_run
//! use pizza_shop::adapter::outbound::sqlite::SqliteOrderStore;
//! use pizza_shop::domain::Pizza;
//! use pizza_shop::infrastructure::config::DatabaseConfig;
//! use pizza_shop::port::OrderStore;
//!
//! fn main() -> pizza_shop::error::Result<()> {
//!     let store = SqliteOrderStore::connect(&DatabaseConfig::in_memory())?;
//!     let pizza = Pizza::from_form("Large", "Pepperoni, Olives")?;
//!     let placed = store.place_order(&[pizza])?;
//!     store.cancel_order(placed.id)?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
