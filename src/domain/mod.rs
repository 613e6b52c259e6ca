//! Order-entry domain types.
//!
//! Everything here is storage-agnostic: identifiers, pizzas with their
//! topping encoding, and the results the order store hands back.

pub mod error;
pub mod id;
pub mod order;
pub mod pizza;

pub use error::DomainError;
pub use id::OrderId;
pub use order::{Cancellation, OrderLine, PlacedOrder};
pub use pizza::{join_toppings, split_toppings, Pizza, TOPPING_SEPARATOR};
