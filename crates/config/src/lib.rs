//! Configuration management for the Akyl Jer portal.
//!
//! This crate provides the types and the loader used by both front ends to
//! locate the portal backend: base URL, request timeout and display theme,
//! read from `.env` files, environment variables and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ColorTheme, Config, ConnectionConfig, Theme};
