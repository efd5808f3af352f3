//! platform-advisor - Deterministic computing-platform recommendations for training courses
//!
//! The decision core lives in [`recommender`]. Everything else carries
//! requests to it: [`api`] parses and validates course descriptions,
//! [`http_server`] and [`cli`] expose it, [`observability`] logs and counts.

pub mod api;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod recommender;
