//! Generic filtered list controller.
//!
//! Responsibilities:
//! - Own records, reference districts, filter state, loading and error state.
//! - Issue sequenced load requests on mount, filter change, clear and reload.
//! - Run status edits with either the optimistic or the pessimistic strategy.
//!
//! Does NOT handle:
//! - Network I/O (requests are returned to the caller and executed by the runtime).
//! - Rendering (see `ui::screens::records`).
//!
//! Invariants:
//! - Only the response to the latest issued load request is applied.
//! - A row with an in-flight status edit cannot be edited again until it settles.
//! - Filtering is never done client-side; every filter change re-fetches.

use std::collections::HashSet;
use std::sync::Arc;

use akyljer_client::{ClientError, District, QueryFilters, RecordStatus};
use ratatui::widgets::TableState;
use tracing::debug;

use crate::action::{Action, ApiResult};
use crate::ui::Toast;

/// How a status edit reconciles local state with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// Apply locally first, revert on failure.
    Optimistic,
    /// Leave local state alone until the server answers.
    Pessimistic,
}

/// Filter fields a list exposes to the filter bar, beyond the district.
pub trait FilterBar: QueryFilters {
    /// Label of the free-text filter, if the list has one.
    const TEXT_LABEL: Option<&'static str> = None;

    fn text(&self) -> Option<&str> {
        None
    }

    fn set_text(&mut self, _value: Option<String>) {}

    /// Advance the type filter. Returns false when the list has none.
    fn cycle_type(&mut self) -> bool {
        false
    }

    fn cycle_status(&mut self) -> bool {
        false
    }

    fn cycle_severity(&mut self) -> bool {
        false
    }

    /// `(label, value)` pairs for the filter bar, `"All"` when unset.
    fn describe(&self) -> Vec<(&'static str, String)>;
}

/// A record type shown by a [`ListView`].
pub trait ListEntity: Clone + Send + Sync + 'static {
    type Filters: FilterBar;

    const TITLE: &'static str;
    /// Plural noun used in messages, e.g. `"crop issues"`.
    const NOUN: &'static str;
    const HEADERS: &'static [&'static str];

    fn id(&self) -> u64;

    fn cells(&self) -> Vec<String>;

    fn status(&self) -> Option<RecordStatus> {
        None
    }

    fn set_status(&mut self, _status: RecordStatus) {}

    fn is_status_editable(&self) -> bool {
        false
    }

    /// Request action for a load of this list.
    fn load_action(request: LoadRequest<Self::Filters>) -> Action;

    /// Request action for a status edit, `None` when the list has no workflow.
    fn update_action(_edit: StatusEdit) -> Option<Action> {
        None
    }
}

/// A sequenced fetch of the current filter set.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest<F> {
    pub seq: u64,
    pub filters: F,
    pub with_districts: bool,
}

/// An in-flight status edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEdit {
    pub id: u64,
    pub status: RecordStatus,
    pub previous: RecordStatus,
}

#[derive(Debug)]
pub struct ListView<E: ListEntity> {
    pub records: Vec<E>,
    pub districts: Vec<District>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: E::Filters,
    pub updating: HashSet<u64>,
    pub table_state: TableState,
    pub strategy: UpdateStrategy,
    mounted: bool,
    latest_seq: u64,
}

impl<E: ListEntity> ListView<E> {
    pub fn new(strategy: UpdateStrategy) -> Self {
        Self {
            records: Vec::new(),
            districts: Vec::new(),
            loading: false,
            error: None,
            filters: E::Filters::default(),
            updating: HashSet::new(),
            table_state: TableState::default(),
            strategy,
            mounted: false,
            latest_seq: 0,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// First visit: fetch districts and the unfiltered list together.
    pub fn mount(&mut self) -> Option<Action> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.begin_load(true))
    }

    /// Re-fetch with the current filters. Districts are re-requested until
    /// they have loaded once.
    pub fn reload(&mut self) -> Action {
        self.begin_load(self.districts.is_empty())
    }

    /// Every fetch starts with a clear banner.
    fn begin_load(&mut self, with_districts: bool) -> Action {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        E::load_action(LoadRequest {
            seq: self.latest_seq,
            filters: self.filters.clone(),
            with_districts,
        })
    }

    /// Apply a load result. Returns false when the response was stale.
    pub fn apply_loaded(
        &mut self,
        seq: u64,
        districts: Option<ApiResult<Vec<District>>>,
        records: ApiResult<Vec<E>>,
    ) -> bool {
        if seq != self.latest_seq {
            debug!(
                list = E::NOUN,
                seq,
                latest = self.latest_seq,
                "discarding stale response"
            );
            return false;
        }
        self.loading = false;

        let mut error = None;
        if let Some(districts) = districts {
            match districts {
                Ok(d) => self.districts = d,
                Err(e) => error = Some(format!("Failed to load districts: {e}")),
            }
        }

        match records {
            Ok(records) => {
                self.records = records;
            }
            Err(e) => {
                self.records.clear();
                error = Some(format!("Failed to load {}: {e}", E::NOUN));
            }
        }
        if error.is_some() {
            self.error = error;
        }
        self.clamp_selection();
        true
    }

    /// Mutate the filters; re-fetch only when they actually changed.
    pub fn update_filters(&mut self, change: impl FnOnce(&mut E::Filters)) -> Option<Action> {
        let before = self.filters.clone();
        change(&mut self.filters);
        if self.filters == before {
            None
        } else {
            Some(self.reload())
        }
    }

    /// Step the district filter through "all" and every known district code.
    pub fn cycle_district(&mut self) -> Option<Action> {
        let next = next_district(&self.districts, self.filters.district());
        self.update_filters(|f| f.set_district(next))
    }

    /// Reset every filter and fetch the unfiltered list.
    pub fn clear_filters(&mut self) -> Action {
        self.filters = E::Filters::default();
        self.reload()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn selected(&self) -> Option<&E> {
        self.table_state.selected().and_then(|i| self.records.get(i))
    }

    pub fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let next = self
            .table_state
            .selected()
            .map(|i| (i + 1).min(self.records.len() - 1))
            .unwrap_or(0);
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let prev = self
            .table_state
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(0);
        self.table_state.select(Some(prev));
    }

    fn clamp_selection(&mut self) {
        if self.records.is_empty() {
            self.table_state.select(None);
        } else {
            let idx = self
                .table_state
                .selected()
                .unwrap_or(0)
                .min(self.records.len() - 1);
            self.table_state.select(Some(idx));
        }
    }

    pub fn is_updating(&self, id: u64) -> bool {
        self.updating.contains(&id)
    }

    /// Start a status edit and return its request. `None` when the row is
    /// missing, busy, read-only or already has `status`.
    pub fn begin_status_update(&mut self, id: u64, status: RecordStatus) -> Option<Action> {
        if self.updating.contains(&id) {
            return None;
        }
        let record = self.records.iter_mut().find(|r| r.id() == id)?;
        if !record.is_status_editable() {
            return None;
        }
        let previous = record.status()?;
        if previous == status {
            return None;
        }
        let request = E::update_action(StatusEdit {
            id,
            status,
            previous,
        })?;
        if self.strategy == UpdateStrategy::Optimistic {
            record.set_status(status);
        }
        self.updating.insert(id);
        Some(request)
    }

    /// Settle a status edit and return the notice to show.
    pub fn finish_status_update(
        &mut self,
        id: u64,
        previous: RecordStatus,
        result: Result<E, Arc<ClientError>>,
    ) -> Toast {
        self.updating.remove(&id);
        match result {
            Ok(server) => {
                if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
                    *record = server;
                }
                Toast::success("Status updated successfully")
            }
            Err(e) => {
                if self.strategy == UpdateStrategy::Optimistic
                    && let Some(record) = self.records.iter_mut().find(|r| r.id() == id)
                {
                    record.set_status(previous);
                }
                // Banner carries the detail; the toast only names the row.
                self.error = Some(format!("Failed to update status: {e}"));
                let outcome = match self.strategy {
                    UpdateStrategy::Optimistic => "reverted",
                    UpdateStrategy::Pessimistic => "unchanged",
                };
                Toast::error(format!("Status of #{id} {outcome}"))
            }
        }
    }
}

/// `None` → first code → ... → last code → `None`.
pub(crate) fn next_district(districts: &[District], current: Option<&str>) -> Option<String> {
    match current {
        None => districts.first().map(|d| d.code.clone()),
        Some(code) => districts
            .iter()
            .position(|d| d.code == code)
            .and_then(|i| districts.get(i + 1))
            .map(|d| d.code.clone()),
    }
}
