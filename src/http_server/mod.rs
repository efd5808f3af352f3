//! # HTTP Server Module
//!
//! Axum server exposing the platform recommender.
//!
//! # Endpoints
//!
//! - `/` - Welcome message
//! - `/health` - Health check
//! - `/rules` - Decision table in priority order
//! - `/suggest_platform` - Recommend a platform for a course (POST)
//! - `/suggest_platform/explain` - Recommendation with rule trace (POST)
//! - `/observability/*` - Health and counters

pub mod config;
pub mod observability_routes;
pub mod server;
pub mod suggest_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use server::{HttpServer, ServerError};
