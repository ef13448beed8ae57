//! Async side effect handlers for request actions.
//!
//! Responsibilities:
//! - Execute the requests returned by `App::update`.
//! - Send result actions back through the action channel.
//!
//! Does NOT handle:
//! - State changes (result actions are applied by `App::update`).
//!
//! Invariants:
//! - Every request runs in a task spawned on the shared `TaskTracker`.
//! - Every spawned request sends exactly one result action, success or failure.
//! - Results echo the sequence number of their request.

mod dispatcher;
mod records;
mod reference;

pub use dispatcher::handle_side_effects;
pub use tokio_util::task::TaskTracker;

/// The portal client is cheap to clone and safe to share across tasks.
pub type SharedClient = akyljer_client::PortalClient;
