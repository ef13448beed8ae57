//! Filtered record list screen, shared by farms, events and crop issues.
//!
//! Responsibilities:
//! - Render the filter bar and the record table for any `ListEntity`.
//! - Show loading, empty and in-flight status edit states.
//!
//! Does NOT handle:
//! - Data fetching or filter changes (see `app::list_view`).
//! - The error banner (rendered by the shell above this screen).

use std::collections::HashSet;

use akyljer_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::app::{FilterBar, ListEntity};
use crate::ui::theme::{ThemeExt, spinner_char};

pub struct RecordsRenderConfig<'a, E: ListEntity> {
    pub loading: bool,
    pub records: &'a [E],
    pub filters: &'a E::Filters,
    /// Rows with a status edit in flight.
    pub updating: &'a HashSet<u64>,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

pub fn render_records<E: ListEntity>(f: &mut Frame, area: Rect, config: RecordsRenderConfig<E>) {
    let RecordsRenderConfig {
        loading,
        records,
        filters,
        updating,
        state,
        theme,
        spinner_frame,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    f.render_widget(Paragraph::new(filter_line(filters, theme)), chunks[0]);

    let block = |title: String| {
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(title, theme.title()))
    };

    if loading && records.is_empty() {
        let spinner = spinner_char(spinner_frame);
        let widget = Paragraph::new(format!("{spinner} Loading {}...", E::NOUN))
            .block(block(format!(" {} ", E::TITLE)))
            .alignment(Alignment::Center);
        f.render_widget(widget, chunks[1]);
        return;
    }

    if records.is_empty() {
        let widget = Paragraph::new(format!("No {} found.", E::NOUN))
            .style(theme.text_dim())
            .block(block(format!(" {} ", E::TITLE)))
            .alignment(Alignment::Center);
        f.render_widget(widget, chunks[1]);
        return;
    }

    let header = Row::new(
        E::HEADERS
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header())),
    )
    .height(1);

    let rows: Vec<Row> = records
        .iter()
        .map(|record| record_row(record, updating.contains(&record.id()), theme))
        .collect();

    let width = 100 / E::HEADERS.len().max(1) as u16;
    let widths = std::iter::repeat_n(Constraint::Percentage(width), E::HEADERS.len());

    let title = if loading {
        format!(" {} {} ", E::TITLE, spinner_char(spinner_frame))
    } else {
        format!(" {} ({}) ", E::TITLE, records.len())
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(block(title))
        .row_highlight_style(theme.highlight())
        .highlight_symbol("> ");

    f.render_stateful_widget(table, chunks[1], state);
}

fn filter_line<'a, F: FilterBar>(filters: &F, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::styled(" Filters ", theme.title())];
    for (label, value) in filters.describe() {
        spans.push(Span::styled(format!(" {label}: "), theme.text_dim()));
        spans.push(Span::styled(value, theme.text()));
    }
    Line::from(spans)
}

fn record_row<'a, E: ListEntity>(record: &E, updating: bool, theme: &Theme) -> Row<'a> {
    let mut cells: Vec<String> = record.cells();
    let status_cell = record.status().and_then(|status| {
        let text = cells.pop()?;
        let style = if updating {
            theme.disabled()
        } else if record.is_status_editable() {
            theme.status(status)
        } else {
            theme.text_dim()
        };
        let text = if updating {
            format!("{text} (updating)")
        } else {
            text
        };
        Some(Cell::from(text).style(style))
    });

    let mut row: Vec<Cell> = cells.into_iter().map(Cell::from).collect();
    row.extend(status_cell);
    Row::new(row).height(1)
}
