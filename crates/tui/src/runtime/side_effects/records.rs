//! List loads and status edits for farms, events and crop issues.

use std::future::Future;
use std::sync::Arc;

use akyljer_client::{
    ClientError, CropIssueFilters, District, EventFilters, FarmFilters, PortalClient, RecordStatus,
};
use tokio::sync::mpsc::Sender;
use tracing::{debug, warn};

use super::{SharedClient, TaskTracker};
use crate::action::{Action, ApiResult};

/// Run a records fetch, concurrently with the districts fetch when asked.
pub(super) async fn with_districts<T>(
    client: &PortalClient,
    with_districts: bool,
    fetch: impl Future<Output = Result<T, ClientError>>,
) -> (Option<ApiResult<Vec<District>>>, ApiResult<T>) {
    if with_districts {
        let (districts, records) = tokio::join!(client.list_districts(), fetch);
        (Some(districts.map_err(Arc::new)), records.map_err(Arc::new))
    } else {
        (None, fetch.await.map_err(Arc::new))
    }
}

pub(super) async fn send(tx: &Sender<Action>, action: Action) {
    if tx.send(action).await.is_err() {
        debug!("action channel closed before result was delivered");
    }
}

pub(super) fn load_farms(
    client: SharedClient,
    tx: Sender<Action>,
    tracker: &TaskTracker,
    seq: u64,
    filters: FarmFilters,
    load_districts: bool,
) {
    tracker.spawn(async move {
        let (districts, records) =
            with_districts(&client, load_districts, client.list_farms(&filters)).await;
        send(
            &tx,
            Action::FarmsLoaded {
                seq,
                districts,
                records,
            },
        )
        .await;
    });
}

pub(super) fn load_events(
    client: SharedClient,
    tx: Sender<Action>,
    tracker: &TaskTracker,
    seq: u64,
    filters: EventFilters,
    load_districts: bool,
) {
    tracker.spawn(async move {
        let (districts, records) =
            with_districts(&client, load_districts, client.list_events(&filters)).await;
        send(
            &tx,
            Action::EventsLoaded {
                seq,
                districts,
                records,
            },
        )
        .await;
    });
}

pub(super) fn load_crop_issues(
    client: SharedClient,
    tx: Sender<Action>,
    tracker: &TaskTracker,
    seq: u64,
    filters: CropIssueFilters,
    load_districts: bool,
) {
    tracker.spawn(async move {
        let (districts, records) =
            with_districts(&client, load_districts, client.list_crop_issues(&filters)).await;
        send(
            &tx,
            Action::CropIssuesLoaded {
                seq,
                districts,
                records,
            },
        )
        .await;
    });
}

pub(super) fn update_event_status(
    client: SharedClient,
    tx: Sender<Action>,
    tracker: &TaskTracker,
    id: u64,
    status: RecordStatus,
    previous: RecordStatus,
) {
    tracker.spawn(async move {
        let result = client.update_event_status(id, status).await;
        if let Err(e) = &result {
            warn!(id, %status, error = %e, "event status update failed");
        }
        send(
            &tx,
            Action::EventStatusUpdated {
                id,
                previous,
                result: result.map_err(Arc::new),
            },
        )
        .await;
    });
}

pub(super) fn update_crop_issue_status(
    client: SharedClient,
    tx: Sender<Action>,
    tracker: &TaskTracker,
    id: u64,
    status: RecordStatus,
    previous: RecordStatus,
) {
    tracker.spawn(async move {
        let result = client.update_crop_issue_status(id, status).await;
        if let Err(e) = &result {
            warn!(id, %status, error = %e, "crop issue status update failed");
        }
        send(
            &tx,
            Action::CropIssueStatusUpdated {
                id,
                previous,
                result: result.map_err(Arc::new),
            },
        )
        .await;
    });
}
