//! Order results as seen by callers of the order store.

use serde::Serialize;

use super::id::OrderId;
use super::pizza::split_toppings;

/// One row of the order listing: a pizza together with its order's id.
///
/// An order with N pizzas appears as N lines that repeat the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub size: String,
    /// Toppings in their stored, comma-joined form.
    pub toppings: String,
}

impl OrderLine {
    #[must_use]
    pub fn new(order_id: OrderId, size: impl Into<String>, toppings: impl Into<String>) -> Self {
        Self {
            order_id,
            size: size.into(),
            toppings: toppings.into(),
        }
    }

    /// Decode the stored topping string back into labels.
    #[must_use]
    pub fn topping_names(&self) -> Vec<String> {
        split_toppings(&self.toppings)
    }
}

/// Confirmation of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedOrder {
    /// Identifier generated by the database.
    pub id: OrderId,
    /// Number of pizza rows written.
    pub pizzas: usize,
}

/// Outcome of cancelling an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Cancellation {
    /// The order existed and was removed along with its pizzas.
    Cancelled { id: OrderId, pizzas_removed: usize },
    /// No order with this id exists; nothing changed.
    NotFound { id: OrderId },
}

impl Cancellation {
    /// Whether the order row existed and was removed.
    #[must_use]
    pub const fn existed(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    #[must_use]
    pub const fn id(&self) -> OrderId {
        match self {
            Self::Cancelled { id, .. } | Self::NotFound { id } => *id,
        }
    }
}
