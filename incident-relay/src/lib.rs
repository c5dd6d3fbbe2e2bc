//! incident-relay: receives incident notification webhooks, maps them to
//! chat messages, and forwards them to a configured destination webhook.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
