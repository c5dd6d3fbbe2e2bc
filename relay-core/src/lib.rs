//! relay-core: Shared infrastructure for the incident relay.
pub mod config;
pub mod error;
pub mod observability;
