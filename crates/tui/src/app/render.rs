//! Layout of the portal shell: header, sidebar, content and footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, HealthState, ListEntity, ListView, Route, selected_nav_entry};
use crate::ui::screens::dashboard::{DashboardRenderConfig, render_dashboard};
use crate::ui::screens::records::{RecordsRenderConfig, render_records};
use crate::ui::theme::ThemeExt;
use crate::ui::toast::render_toasts;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
pub const SIDEBAR_WIDTH: u16 = 20;

impl App {
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);
        self.render_sidebar(f, body[0]);
        self.render_content(f, body[1]);

        self.render_footer(f, chunks[2]);
        render_toasts(f, &self.toasts, &self.theme);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let health_style = match self.health {
            HealthState::Healthy => theme.success(),
            HealthState::Unhealthy => theme.error(),
            HealthState::Unknown => theme.text_dim(),
        };
        let line = Line::from(vec![
            Span::styled("Akyl Jer Government Portal", theme.title()),
            Span::raw(" - "),
            Span::styled(self.route.title(), theme.text()),
            Span::styled("  |  API ", theme.text_dim()),
            Span::styled(self.health.label(), health_style),
            Span::styled(format!("  |  {}", self.base_url), theme.text_dim()),
        ]);
        f.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            ),
            area,
        );
    }

    fn render_sidebar(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let active = selected_nav_entry(&self.path);
        let items: Vec<ListItem> = Route::ALL
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let text = format!("{} {}", i + 1, route.title());
                let style = if *route == active {
                    theme.highlight()
                } else {
                    theme.text()
                };
                ListItem::new(Span::styled(text, style))
            })
            .collect();
        f.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(Span::styled(" Menu ", theme.title())),
            ),
            area,
        );
    }

    fn render_content(&mut self, f: &mut Frame, area: Rect) {
        let error = self.current_error().map(str::to_string);
        let banner_height = if error.is_some() { 3 } else { 0 };
        let editor_height = if self.text_input.is_some() { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner_height),
                Constraint::Length(editor_height),
                Constraint::Min(0),
            ])
            .split(area);

        if let Some(message) = error {
            let banner = Paragraph::new(Span::styled(message, self.theme.error()))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.theme.error())
                        .title(" Error (Esc to dismiss) "),
                );
            f.render_widget(banner, chunks[0]);
        }
        if let Some(input) = &self.text_input {
            input.render(f, chunks[1], &self.theme);
        }

        let theme = &self.theme;
        let spinner_frame = self.spinner_frame;
        match self.route {
            Route::Dashboard => {
                let district_label = self.dashboard.district_label();
                render_dashboard(
                    f,
                    chunks[2],
                    DashboardRenderConfig {
                        loading: self.dashboard.loading,
                        summary: self.dashboard.summary.as_ref(),
                        district_label: &district_label,
                        health: self.health,
                        theme,
                        spinner_frame,
                    },
                );
            }
            Route::Farms => render_list(f, chunks[2], &mut self.farms, theme, spinner_frame),
            Route::Events => render_list(f, chunks[2], &mut self.events, theme, spinner_frame),
            Route::CropIssues => {
                render_list(f, chunks[2], &mut self.crop_issues, theme, spinner_frame)
            }
        }
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let hints = match self.route {
            Route::Dashboard => "1-4 pages | d district | c all districts | r reload | q quit",
            Route::Farms => "j/k move | d district | / search | c clear | r reload | q quit",
            Route::Events => {
                "j/k move | d district | t type | s status | n/p/x set status | c clear | q quit"
            }
            Route::CropIssues => {
                "d district | / crop | t problem | v severity | s status | n/p/x set status | c clear"
            }
        };
        f.render_widget(
            Paragraph::new(Span::styled(hints, self.theme.text_dim())).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border()),
            ),
            area,
        );
    }
}

fn render_list<E: ListEntity>(
    f: &mut Frame,
    area: Rect,
    view: &mut ListView<E>,
    theme: &akyljer_config::Theme,
    spinner_frame: u8,
) {
    render_records(
        f,
        area,
        RecordsRenderConfig {
            loading: view.loading,
            records: &view.records,
            filters: &view.filters,
            updating: &view.updating,
            state: &mut view.table_state,
            theme,
            spinner_frame,
        },
    );
}
