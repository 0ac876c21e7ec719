//! Sidecar HTTP server reporting liveness status for a co-located
//! notebook service.

pub mod app_state;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
