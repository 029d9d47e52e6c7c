//! # Nimbus REST
//!
//! REST API layer using Axum for the Nimbus weather proxy.
//! Provides the weather conditions endpoints and health checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
