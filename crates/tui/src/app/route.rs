//! Navigation shell routes.
//!
//! Responsibilities:
//! - Map paths to the four page controllers.
//! - Pick the highlighted sidebar entry for a path.
//!
//! Invariants:
//! - `/` and `/dashboard` both resolve to the dashboard.
//! - Sidebar selection is a longest-prefix match that falls back to the dashboard.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Farms,
    Events,
    CropIssues,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 4] = [Self::Dashboard, Self::Farms, Self::Events, Self::CropIssues];

    /// Canonical path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Farms => "/farms",
            Self::Events => "/events",
            Self::CropIssues => "/crop-issues",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Farms => "Farms",
            Self::Events => "Events",
            Self::CropIssues => "Crop Issues",
        }
    }

    /// Exact route match. Unknown paths have no page.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "/dashboard" => Some(Self::Dashboard),
            "/farms" => Some(Self::Farms),
            "/events" => Some(Self::Events),
            "/crop-issues" => Some(Self::CropIssues),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Sidebar entry to highlight for `path`.
pub fn selected_nav_entry(path: &str) -> Route {
    Route::ALL
        .iter()
        .copied()
        .filter(|route| path.starts_with(route.path()))
        .max_by_key(|route| route.path().len())
        .unwrap_or(Route::Dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_and_dashboard_map_to_dashboard() {
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/crop-issues"), Some(Route::CropIssues));
        assert_eq!(Route::from_path("/reports"), None);
    }

    #[test]
    fn test_nav_entry_uses_prefix_and_defaults_to_dashboard() {
        assert_eq!(selected_nav_entry("/events"), Route::Events);
        assert_eq!(selected_nav_entry("/events/42"), Route::Events);
        assert_eq!(selected_nav_entry("/farms?district=ALM"), Route::Farms);
        assert_eq!(selected_nav_entry("/crop-issues/7"), Route::CropIssues);
        assert_eq!(selected_nav_entry("/"), Route::Dashboard);
        assert_eq!(selected_nav_entry("/unknown"), Route::Dashboard);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Route::CropIssues.next(), Route::Dashboard);
        assert_eq!(Route::Dashboard.previous(), Route::CropIssues);
    }
}
