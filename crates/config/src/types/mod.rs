//! Configuration types.

mod connection;
mod theme;

pub use connection::{Config, ConnectionConfig};
pub use theme::{ColorTheme, Theme};
