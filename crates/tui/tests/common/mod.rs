//! Shared utilities for terminal portal tests.
//!
//! Invariants:
//! - Fixtures come from the client crate's fixtures directory.
//! - Each harness owns its own mock server and action channel.

#![allow(dead_code)]

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::mpsc;

pub use akyljer_client::ClientError;
pub use akyljer_client::testing::{client_for, load_fixture};
pub use akyljer_tui::action::Action;
pub use akyljer_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Deserialize a fixture into a model type.
pub fn fixture<T: DeserializeOwned>(path: &str) -> T {
    serde_json::from_value(load_fixture(path)).expect("fixture should match the model")
}

/// A shared transport failure, as carried by result actions.
pub fn network_error() -> Arc<ClientError> {
    Arc::new(ClientError::Transport("connection refused".to_string()))
}

/// A shared HTTP failure, as carried by result actions.
pub fn api_error(status: u16, status_text: &str) -> Arc<ClientError> {
    Arc::new(ClientError::Api {
        status,
        status_text: status_text.to_string(),
        url: "http://localhost:8000/api/".to_string(),
    })
}

/// Mock server, action channel and client for side effect tests.
pub struct SideEffectsTestHarness {
    pub mock_server: MockServer,
    pub action_rx: Receiver<Action>,
    pub action_tx: Sender<Action>,
    pub client: SharedClient,
    pub task_tracker: TaskTracker,
}

impl SideEffectsTestHarness {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let client = client_for(&mock_server.uri());

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            task_tracker: TaskTracker::new(),
        }
    }

    /// Run `handle_side_effects` and collect every action sent back before the deadline.
    ///
    /// # Panics
    /// - If `handle_side_effects` blocks instead of spawning its work
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        let handle_future = handle_side_effects(
            action,
            self.client.clone(),
            self.action_tx.clone(),
            self.task_tracker.clone(),
        );
        if tokio::time::timeout(tokio::time::Duration::from_millis(100), handle_future)
            .await
            .is_err()
        {
            panic!("handle_side_effects timed out - it may be blocking on network I/O");
        }

        tokio::task::yield_now().await;

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(timeout_secs);
        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(
                tokio::time::Duration::from_millis(100),
                self.action_rx.recv(),
            )
            .await
            {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => break,
                Err(_) => tokio::task::yield_now().await,
            }
        }
        actions
    }

    /// Wait for the next action.
    ///
    /// # Panics
    /// - If no action arrives within `timeout_ms`
    pub async fn expect_action(&mut self, timeout_ms: u64) -> Action {
        tokio::time::timeout(
            tokio::time::Duration::from_millis(timeout_ms),
            self.action_rx.recv(),
        )
        .await
        .expect("Timeout waiting for action")
        .expect("Channel closed while waiting for action")
    }

    /// Run a request and return its single result action.
    pub async fn run(&mut self, action: Action) -> Action {
        handle_side_effects(
            action,
            self.client.clone(),
            self.action_tx.clone(),
            self.task_tracker.clone(),
        )
        .await;
        self.expect_action(5_000).await
    }
}
