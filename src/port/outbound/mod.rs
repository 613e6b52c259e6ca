//! Outbound ports: capabilities the application needs from the outside.

pub mod store;
