//! Dashboard summary and health probe.

use std::sync::Arc;

use tokio::sync::mpsc::Sender;

use super::records::{send, with_districts};
use super::{SharedClient, TaskTracker};
use crate::action::Action;

pub(super) fn load_dashboard(
    client: SharedClient,
    tx: Sender<Action>,
    tracker: &TaskTracker,
    seq: u64,
    district: Option<String>,
    load_districts: bool,
) {
    tracker.spawn(async move {
        let (districts, summary) = with_districts(
            &client,
            load_districts,
            client.dashboard_summary(district.as_deref()),
        )
        .await;
        send(
            &tx,
            Action::DashboardLoaded {
                seq,
                districts,
                summary,
            },
        )
        .await;
    });
}

pub(super) fn load_health(client: SharedClient, tx: Sender<Action>, tracker: &TaskTracker) {
    tracker.spawn(async move {
        let result = client.health().await.map_err(Arc::new);
        send(&tx, Action::HealthLoaded(result)).await;
    });
}
