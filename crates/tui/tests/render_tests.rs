//! Rendering tests with ratatui's `TestBackend`.

mod common;

use akyljer_client::{CropIssue, DashboardSummary, District, Event, RecordStatus};
use akyljer_config::ColorTheme;
use akyljer_tui::{App, Route};
use common::*;
use ratatui::{Terminal, backend::TestBackend};

fn app() -> App {
    App::new(ColorTheme::Default, "http://localhost:8000".to_string())
}

fn render(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn load_events(app: &mut App, records: ApiResultEvents) {
    let requests = app.update(Action::Navigate(Route::Events));
    let seq = match requests.first() {
        Some(Action::LoadEvents { seq, .. }) => *seq,
        other => panic!("expected an events load, got {other:?}"),
    };
    app.update(Action::EventsLoaded {
        seq,
        districts: Some(Ok(fixture::<Vec<District>>("districts/list_districts.json"))),
        records,
    });
}

type ApiResultEvents = akyljer_tui::action::ApiResult<Vec<Event>>;

#[test]
fn test_shell_shows_title_sidebar_and_footer() {
    let mut app = app();
    app.open_path("/");
    let screen = render(&mut app, 120, 30);

    assert!(screen.contains("Akyl Jer Government Portal"));
    for entry in ["Dashboard", "Farms", "Events", "Crop Issues"] {
        assert!(screen.contains(entry), "sidebar should list {entry}");
    }
    assert!(screen.contains("q quit"));
}

#[test]
fn test_loading_state_shows_spinner_text() {
    let mut app = app();
    app.update(Action::Navigate(Route::CropIssues));
    let screen = render(&mut app, 120, 30);
    assert!(screen.contains("Loading crop issues..."));
}

#[test]
fn test_events_table_renders_rows_and_labels() {
    let mut app = app();
    load_events(&mut app, Ok(fixture("events/list_events.json")));
    let screen = render(&mut app, 160, 30);

    assert!(screen.contains("Almas Nurzhanov"));
    assert!(screen.contains("Disease Report"));
    assert!(screen.contains("Vaccination"));
    assert!(screen.contains("N/A"));
    assert!(screen.contains("District: All"));
}

#[test]
fn test_failed_events_load_renders_banner_and_empty_table() {
    let mut app = app();
    load_events(&mut app, Err(network_error()));
    let screen = render(&mut app, 160, 30);

    assert!(screen.contains("Failed to load events: Network Error"));
    assert!(screen.contains("No events found."));
}

#[test]
fn test_inflight_row_is_marked() {
    let mut app = app();
    let requests = app.update(Action::Navigate(Route::CropIssues));
    let Some(Action::LoadCropIssues { seq, .. }) = requests.first() else {
        panic!("expected a crop issue load");
    };
    app.update(Action::CropIssuesLoaded {
        seq: *seq,
        districts: None,
        records: Ok(fixture::<Vec<CropIssue>>("crop_issues/list_crop_issues.json")),
    });
    app.update(Action::SetSelectedStatus(RecordStatus::Resolved));

    let screen = render(&mut app, 180, 30);
    assert!(screen.contains("(updating)"));
}

#[test]
fn test_dashboard_counters_and_breakdowns() {
    let mut app = app();
    let requests = app.open_path("/dashboard");
    let Some(Action::LoadDashboard { seq, .. }) = requests.first() else {
        panic!("expected a dashboard load");
    };
    app.update(Action::DashboardLoaded {
        seq: *seq,
        districts: Some(Ok(fixture::<Vec<District>>("districts/list_districts.json"))),
        summary: Ok(fixture::<DashboardSummary>("dashboard/summary.json")),
    });
    let screen = render(&mut app, 140, 40);

    assert!(screen.contains("Total farms"));
    assert!(screen.contains("1414"));
    assert!(screen.contains("Open outbreaks"));
    assert!(screen.contains("Farms by district"));
    assert!(screen.contains("Outbreaks by disease"));
    assert!(screen.contains("Almaty Region"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = app();
    load_events(&mut app, Ok(fixture("events/list_events.json")));
    app.toasts.push(akyljer_tui::Toast::error("boom"));
    render(&mut app, 20, 5);
}
