//! HTTP boundary: router, shared state, and server configuration.

pub mod config;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{AppState, build_router};
