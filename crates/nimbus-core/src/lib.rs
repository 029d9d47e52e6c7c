//! # Nimbus Core
//!
//! Core types, domain model, and error definitions for the Nimbus weather
//! proxy. This crate provides the foundational abstractions used across all
//! layers: the unified error taxonomy, the request granularity model, and
//! location normalization.

pub mod error;
pub mod granularity;
pub mod location;
pub mod query;
pub mod result;

pub use error::*;
pub use granularity::*;
pub use location::*;
pub use query::*;
pub use result::*;
