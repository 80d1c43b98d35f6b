//! HTTP API and terminal client for the liquidity dashboard.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod render;
pub mod routes;
pub mod source;
pub mod state;
