//! Toast notifications for transient feedback.
//!
//! Toasts stack in the bottom-right corner and expire after a level-specific
//! TTL. Errors stay on screen longer than the other levels.

use std::time::{Duration, Instant};

use akyljer_config::Theme;
use akyljer_config::constants::{DEFAULT_TOAST_TTL_SECS, DEFAULT_ERROR_TOAST_TTL_SECS};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use uuid::Uuid;

use crate::app::{FOOTER_HEIGHT, HEADER_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => {
                Duration::from_secs(DEFAULT_TOAST_TTL_SECS)
            }
            Self::Error => Duration::from_secs(DEFAULT_ERROR_TOAST_TTL_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

const MAX_TOASTS: usize = 5;
const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 60;

/// Render active toasts bottom-right, most recent last.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<_> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let skip = active.len().saturating_sub(MAX_TOASTS);
    let active = &active[skip..];

    let total_height = active.len() as u16 * TOAST_HEIGHT;
    let area = f.area();
    if area.height < HEADER_HEIGHT + FOOTER_HEIGHT + total_height + 2
        || area.width < TOAST_WIDTH + 2
    {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 2),
        y: area.height.saturating_sub(FOOTER_HEIGHT + total_height + 1),
        width: TOAST_WIDTH,
        height: total_height,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat_n(Constraint::Length(TOAST_HEIGHT), active.len())
                .collect::<Vec<_>>(),
        )
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Success => theme.success,
        ToastLevel::Warning => theme.warning,
        ToastLevel::Error => theme.error,
    };

    let max_chars = area.width.saturating_sub(10) as usize;
    let message = if toast.message.chars().count() > max_chars {
        let head: String = toast
            .message
            .chars()
            .take(max_chars.saturating_sub(3))
            .collect();
        format!("{head}...")
    } else {
        toast.message.clone()
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", toast.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(theme.text)),
    ]);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        area,
    );
}
