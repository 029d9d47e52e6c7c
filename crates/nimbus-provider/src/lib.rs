//! # Nimbus Provider
//!
//! Upstream Client Adapter: wraps the network call to the weather provider
//! and maps every transport, status, and parse failure into a single
//! upstream-failure signal. Only the fields relevant to the requested
//! granularity are retained.

pub mod client;
pub mod report;

pub use client::*;
pub use report::*;
