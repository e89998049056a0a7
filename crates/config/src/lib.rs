//! Configuration for the veriwork client core.
//!
//! Uses figment for YAML-based configuration with sensible defaults.

pub mod schema;

pub use schema::{ApiConfig, Config, SessionConfig};
