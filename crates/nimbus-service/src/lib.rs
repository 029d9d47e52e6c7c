//! # Nimbus Service
//!
//! The cache-aside orchestration layer: the policy deciding when to read
//! from cache vs. fetch upstream, the key-naming scheme, the serialization
//! contract, TTL assignment, and failure handling when either side is
//! unavailable.

pub mod cache;
pub mod dto;
pub mod weather_service;
pub mod weather_service_impl;

pub use cache::*;
pub use dto::*;
pub use weather_service::*;
pub use weather_service_impl::*;
