//! Runtime components for the terminal portal.
//!
//! - Terminal restoration (`TerminalGuard`)
//! - Client creation from configuration
//! - Async side effect handlers for API calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `app` and `ui`).
//!
//! Invariants:
//! - Side effects run in tracked tokio tasks so the event loop never blocks.

pub mod client;
pub mod side_effects;
pub mod terminal;
