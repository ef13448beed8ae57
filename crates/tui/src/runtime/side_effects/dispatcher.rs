//! Routes request actions to their handlers.

use std::time::Instant;

use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

use crate::action::Action;
use crate::runtime::side_effects::{SharedClient, TaskTracker, records, reference};

/// Execute the side effect of `action`, if it has one.
///
/// Handlers only spawn work on `task_tracker`; this returns as soon as the
/// request task is started.
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    if !action.is_request() {
        return;
    }
    let start = Instant::now();
    let span = info_span!(
        "tui.handle_action",
        action_type = action.type_name(),
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, client, tx, task_tracker);
        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

fn handle_action(action: Action, client: SharedClient, tx: Sender<Action>, tracker: TaskTracker) {
    match action {
        Action::LoadFarms {
            seq,
            filters,
            with_districts,
        } => records::load_farms(client, tx, &tracker, seq, filters, with_districts),
        Action::LoadEvents {
            seq,
            filters,
            with_districts,
        } => records::load_events(client, tx, &tracker, seq, filters, with_districts),
        Action::LoadCropIssues {
            seq,
            filters,
            with_districts,
        } => records::load_crop_issues(client, tx, &tracker, seq, filters, with_districts),
        Action::UpdateEventStatus {
            id,
            status,
            previous,
        } => records::update_event_status(client, tx, &tracker, id, status, previous),
        Action::UpdateCropIssueStatus {
            id,
            status,
            previous,
        } => records::update_crop_issue_status(client, tx, &tracker, id, status, previous),
        Action::LoadDashboard {
            seq,
            district,
            with_districts,
        } => reference::load_dashboard(client, tx, &tracker, seq, district, with_districts),
        Action::LoadHealth => reference::load_health(client, tx, &tracker),
        _ => {}
    }
}
