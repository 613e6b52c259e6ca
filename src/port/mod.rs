//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the shop frontend and the systems it
//! talks to. Adapters implement them.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │    CLI frontend         │
//!                    │  (adapter::inbound)     │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────▼─────────────┐
//!                    │  Domain + OrderStore    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────▼─────────────┐
//!                    │   SQLite store adapter  │
//!                    │  (adapter::outbound)    │
//!                    └─────────────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`OrderStore`] - Persistence for orders and their pizzas

pub mod outbound;

pub use outbound::store::OrderStore;
