//! Persistence port for orders.

use crate::domain::{Cancellation, OrderId, OrderLine, Pizza, PlacedOrder};
use crate::error::Result;

/// Storage operations for orders and their pizzas.
///
/// Calls are synchronous and block until the database round-trip
/// completes. Implementations own their connection exclusively.
pub trait OrderStore: Send + Sync {
    /// Create an order holding the given pizzas. Returns the generated id.
    ///
    /// Either the order and all of its pizzas are stored, or nothing is.
    fn place_order(&self, order: &[Pizza]) -> Result<PlacedOrder>;

    /// List every pizza of every order, one line per pizza, ordered by
    /// order id and then by the order in which pizzas were added.
    fn list_orders(&self) -> Result<Vec<OrderLine>>;

    /// Remove an order and all of its pizzas.
    ///
    /// Cancelling an unknown id is not an error; it yields
    /// [`Cancellation::NotFound`] and changes nothing.
    fn cancel_order(&self, id: OrderId) -> Result<Cancellation>;
}
