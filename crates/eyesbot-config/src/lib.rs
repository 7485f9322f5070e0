//! # EyesBot Config
//!
//! Configuration for the EyesBot MCP bridge: an optional TOML file with
//! `${VAR}` expansion, overlaid with the `ROBOT_BASE_URL` and `SECURE_URL`
//! environment variables.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
