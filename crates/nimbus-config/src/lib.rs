//! # Nimbus Config
//!
//! Layered configuration for the Nimbus weather proxy: TOML files under
//! `config/`, overridden by `NIMBUS_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
