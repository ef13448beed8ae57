//! Application state, navigation shell and controllers.
//!
//! The module is organized into submodules:
//! - `route`: paths, sidebar selection
//! - `list_view`: the generic filtered list controller
//! - `entities`: columns and filters of farms, events and crop issues
//! - `dashboard`: dashboard controller and health state
//! - `input`: key handling
//! - `render`: layout and screen dispatch
//!
//! `App::update` applies an action and returns the requests it triggers;
//! the runtime executes those and feeds the results back through `update`.

mod dashboard;
mod entities;
mod input;
pub mod list_view;
mod render;
mod route;

pub use dashboard::{DashboardView, HealthState};
pub use list_view::{FilterBar, ListEntity, ListView, LoadRequest, StatusEdit, UpdateStrategy};
pub use render::{FOOTER_HEIGHT, HEADER_HEIGHT, SIDEBAR_WIDTH};
pub use route::{Route, selected_nav_entry};

use akyljer_client::{CropIssue, Event, Farm, Labeled};
use akyljer_config::{ColorTheme, Theme};
use tracing::debug;

use crate::action::Action;
use crate::ui::Toast;
use crate::ui::components::FilterInput;

/// Main application state.
pub struct App {
    pub route: Route,
    /// Current path; drives sidebar highlighting.
    pub path: String,
    pub dashboard: DashboardView,
    pub farms: ListView<Farm>,
    pub events: ListView<Event>,
    pub crop_issues: ListView<CropIssue>,
    pub health: HealthState,
    pub toasts: Vec<Toast>,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    pub base_url: String,
    pub spinner_frame: u8,
    /// Free-text filter being edited, if any.
    pub text_input: Option<FilterInput>,
}

/// Run `$body` against the list controller of the current route.
/// Evaluates to `$default` on the dashboard.
macro_rules! with_list {
    ($app:expr, $view:ident => $body:expr, $default:expr) => {
        match $app.route {
            Route::Farms => {
                let $view = &mut $app.farms;
                $body
            }
            Route::Events => {
                let $view = &mut $app.events;
                $body
            }
            Route::CropIssues => {
                let $view = &mut $app.crop_issues;
                $body
            }
            Route::Dashboard => $default,
        }
    };
}

impl App {
    pub fn new(color_theme: ColorTheme, base_url: String) -> Self {
        Self {
            route: Route::Dashboard,
            path: "/".to_string(),
            dashboard: DashboardView::new(),
            farms: ListView::new(UpdateStrategy::Optimistic),
            events: ListView::new(UpdateStrategy::Pessimistic),
            crop_issues: ListView::new(UpdateStrategy::Optimistic),
            health: HealthState::Unknown,
            toasts: Vec::new(),
            color_theme,
            theme: Theme::from(color_theme),
            base_url,
            spinner_frame: 0,
            text_input: None,
        }
    }

    /// Apply an action and return the requests it triggers.
    pub fn update(&mut self, action: Action) -> Vec<Action> {
        match action {
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.toasts.retain(|t| !t.is_expired());
                Vec::new()
            }
            Action::Navigate(route) => self.navigate(route),
            Action::NextScreen => self.navigate(self.route.next()),
            Action::PreviousScreen => self.navigate(self.route.previous()),
            Action::SelectNext => {
                with_list!(self, view => view.select_next(), ());
                Vec::new()
            }
            Action::SelectPrevious => {
                with_list!(self, view => view.select_previous(), ());
                Vec::new()
            }
            Action::CycleDistrict => match self.route {
                Route::Dashboard => vec![self.dashboard.cycle_district()],
                _ => with_list!(
                    self,
                    view => view.cycle_district().into_iter().collect(),
                    Vec::new()
                ),
            },
            Action::CycleType => with_list!(
                self,
                view => view.update_filters(|f| { f.cycle_type(); }).into_iter().collect(),
                Vec::new()
            ),
            Action::CycleStatus => with_list!(
                self,
                view => view.update_filters(|f| { f.cycle_status(); }).into_iter().collect(),
                Vec::new()
            ),
            Action::CycleSeverity => with_list!(
                self,
                view => view.update_filters(|f| { f.cycle_severity(); }).into_iter().collect(),
                Vec::new()
            ),
            Action::ApplyTextFilter(value) => {
                self.text_input = None;
                with_list!(
                    self,
                    view => view.update_filters(|f| f.set_text(value)).into_iter().collect(),
                    Vec::new()
                )
            }
            Action::ClearFilters => match self.route {
                Route::Dashboard => self.dashboard.clear_district().into_iter().collect(),
                _ => with_list!(self, view => vec![view.clear_filters()], Vec::new()),
            },
            Action::Reload => match self.route {
                Route::Dashboard => vec![self.dashboard.reload(), Action::LoadHealth],
                _ => with_list!(self, view => vec![view.reload()], Vec::new()),
            },
            Action::DismissError => {
                match self.route {
                    Route::Dashboard => self.dashboard.dismiss_error(),
                    _ => with_list!(self, view => view.dismiss_error(), ()),
                }
                Vec::new()
            }
            Action::SetSelectedStatus(status) => self.set_selected_status(status),

            Action::FarmsLoaded {
                seq,
                districts,
                records,
            } => {
                self.farms.apply_loaded(seq, districts, records);
                Vec::new()
            }
            Action::EventsLoaded {
                seq,
                districts,
                records,
            } => {
                self.events.apply_loaded(seq, districts, records);
                Vec::new()
            }
            Action::CropIssuesLoaded {
                seq,
                districts,
                records,
            } => {
                self.crop_issues.apply_loaded(seq, districts, records);
                Vec::new()
            }
            Action::DashboardLoaded {
                seq,
                districts,
                summary,
            } => {
                self.dashboard.apply_loaded(seq, districts, summary);
                Vec::new()
            }
            Action::HealthLoaded(result) => {
                self.health = HealthState::from_result(&result);
                Vec::new()
            }
            Action::EventStatusUpdated {
                id,
                previous,
                result,
            } => {
                let toast = self.events.finish_status_update(id, previous, result);
                self.toasts.push(toast);
                Vec::new()
            }
            Action::CropIssueStatusUpdated {
                id,
                previous,
                result,
            } => {
                let toast = self.crop_issues.finish_status_update(id, previous, result);
                self.toasts.push(toast);
                Vec::new()
            }

            Action::Quit
            | Action::Input(_)
            | Action::Resize(..)
            | Action::LoadFarms { .. }
            | Action::LoadEvents { .. }
            | Action::LoadCropIssues { .. }
            | Action::LoadDashboard { .. }
            | Action::LoadHealth
            | Action::UpdateEventStatus { .. }
            | Action::UpdateCropIssueStatus { .. } => Vec::new(),
        }
    }

    /// Open a path as typed at startup. Unknown paths fall back to the
    /// sidebar entry they prefix-match.
    pub fn open_path(&mut self, path: &str) -> Vec<Action> {
        let route = Route::from_path(path).unwrap_or_else(|| selected_nav_entry(path));
        let requests = self.navigate(route);
        self.path = path.to_string();
        requests
    }

    /// Switch pages, mounting the target controller on its first visit.
    fn navigate(&mut self, route: Route) -> Vec<Action> {
        debug!(from = %self.route, to = %route, "navigating");
        self.route = route;
        self.path = route.path().to_string();
        self.text_input = None;
        match route {
            Route::Dashboard => match self.dashboard.mount() {
                Some(load) => vec![load, Action::LoadHealth],
                None => Vec::new(),
            },
            Route::Farms => self.farms.mount().into_iter().collect(),
            Route::Events => self.events.mount().into_iter().collect(),
            Route::CropIssues => self.crop_issues.mount().into_iter().collect(),
        }
    }

    fn set_selected_status(&mut self, status: akyljer_client::RecordStatus) -> Vec<Action> {
        match self.route {
            Route::Events => {
                let Some(event) = self.events.selected() else {
                    return Vec::new();
                };
                if !event.is_status_editable() {
                    let message =
                        format!("{} events have no editable status", event.event_type.label());
                    self.toasts.push(Toast::warning(message));
                    return Vec::new();
                }
                let id = event.id;
                self.events.begin_status_update(id, status).into_iter().collect()
            }
            Route::CropIssues => {
                let Some(id) = self.crop_issues.selected().map(|c| c.id) else {
                    return Vec::new();
                };
                self.crop_issues.begin_status_update(id, status).into_iter().collect()
            }
            Route::Dashboard | Route::Farms => Vec::new(),
        }
    }

    /// Error banner of the current page.
    pub fn current_error(&self) -> Option<&str> {
        match self.route {
            Route::Dashboard => self.dashboard.error.as_deref(),
            Route::Farms => self.farms.error.as_deref(),
            Route::Events => self.events.error.as_deref(),
            Route::CropIssues => self.crop_issues.error.as_deref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self.route {
            Route::Dashboard => self.dashboard.loading,
            Route::Farms => self.farms.loading,
            Route::Events => self.events.loading,
            Route::CropIssues => self.crop_issues.loading,
        }
    }
}
