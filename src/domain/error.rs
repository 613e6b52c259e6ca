//! Domain validation errors for order-entry types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! They are returned by the validating constructors on [`Pizza`] and by the
//! [`OrderId`] parser, before any statement reaches the database.
//!
//! # Examples
//!
//! ```
//! use pizza_shop::domain::error::DomainError;
//! use pizza_shop::domain::pizza::Pizza;
//!
//! let result = Pizza::new("   ");
//! assert!(matches!(result, Err(DomainError::EmptySize)));
//! ```
//!
//! [`Pizza`]: crate::domain::pizza::Pizza
//! [`OrderId`]: crate::domain::id::OrderId

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An order must contain at least one pizza.
    #[error("an order needs at least one pizza")]
    EmptyOrder,

    /// A pizza size label must not be blank.
    #[error("pizza size cannot be empty")]
    EmptySize,

    /// Topping labels are stored joined by ", " and may not contain a comma.
    #[error("topping '{topping}' cannot contain ','")]
    ToppingContainsSeparator {
        /// The rejected topping label.
        topping: String,
    },

    /// Order identifiers are positive integers.
    #[error("invalid order id '{input}': please enter a valid order ID")]
    InvalidOrderId {
        /// The text that failed to parse.
        input: String,
    },
}
