//! Factory functions that build configured components.
//!
//! # Submodules
//!
//! - [`persistence`] - Order store construction

pub mod persistence;

pub use persistence::{build_order_store, open_order_store};
