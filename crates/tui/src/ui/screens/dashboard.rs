//! Dashboard screen: KPI counters and the two breakdown tables.

use akyljer_client::DashboardSummary;
use akyljer_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::HealthState;
use crate::ui::theme::{ThemeExt, spinner_char};

pub struct DashboardRenderConfig<'a> {
    pub loading: bool,
    pub summary: Option<&'a DashboardSummary>,
    /// Selected district name, or "All districts".
    pub district_label: &'a str,
    pub health: HealthState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

pub fn render_dashboard(f: &mut Frame, area: Rect, config: DashboardRenderConfig) {
    let DashboardRenderConfig {
        loading,
        summary,
        district_label,
        health,
        theme,
        spinner_frame,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(4),
        ])
        .split(area);

    let health_style = match health {
        HealthState::Healthy => theme.success(),
        HealthState::Unhealthy => theme.error(),
        HealthState::Unknown => theme.text_dim(),
    };
    let mut status_spans = vec![
        Span::styled(" District: ", theme.text_dim()),
        Span::styled(district_label.to_string(), theme.text()),
        Span::styled("   API: ", theme.text_dim()),
        Span::styled(health.label(), health_style),
    ];
    if loading {
        status_spans.push(Span::styled(
            format!("   {} Loading dashboard...", spinner_char(spinner_frame)),
            theme.info(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(status_spans)), chunks[0]);

    let Some(summary) = summary else {
        let message = if loading {
            format!("{} Loading dashboard...", spinner_char(spinner_frame))
        } else {
            "No dashboard data. Press 'r' to reload.".to_string()
        };
        f.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(theme.border())),
            chunks[1],
        );
        return;
    };

    render_counters(f, chunks[1], summary, theme);

    let tables = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let district_rows = summary.farms_by_district.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.district_name.clone()),
            Cell::from(row.district_code.clone()),
            Cell::from(row.farm_count.to_string()),
        ])
    });
    let districts = Table::new(
        district_rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ],
    )
    .header(header(&["District", "Code", "Farms"], theme))
    .block(titled_block(" Farms by district ", theme));
    f.render_widget(districts, tables[0]);

    let disease_rows = summary.outbreaks_by_disease.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.disease_suspected.clone()),
            Cell::from(row.count.to_string()),
        ])
    });
    let diseases = Table::new(
        disease_rows,
        [Constraint::Percentage(70), Constraint::Percentage(30)],
    )
    .header(header(&["Disease", "Open outbreaks"], theme))
    .block(titled_block(" Outbreaks by disease ", theme));
    f.render_widget(diseases, tables[1]);
}

fn render_counters(f: &mut Frame, area: Rect, summary: &DashboardSummary, theme: &Theme) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let counters = [
        ("Total farms", summary.total_farms, theme.info()),
        ("Total animals", summary.total_animals, theme.success()),
        ("Open outbreaks", summary.open_outbreaks, theme.warning()),
    ];
    for ((label, value, style), card) in counters.into_iter().zip(cards.iter()) {
        let text = vec![
            Line::from(Span::styled(
                value.to_string(),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, theme.text_dim())),
        ];
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(theme.border())),
            *card,
        );
    }
}

fn header<'a>(titles: &[&'a str], theme: &Theme) -> Row<'a> {
    Row::new(
        titles
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header())),
    )
}

fn titled_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(title, theme.title()))
}
