//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges defaults, environment
//!   variables and explicit overrides.
//! - Enforce the `DOTENV_DISABLED` gate before touching `.env` files.
//!
//! Does NOT handle:
//! - Persisting configuration (the portal keeps no local state).
//! - Constructing HTTP clients (see the client crate).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
