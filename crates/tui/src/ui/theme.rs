//! TUI-specific theme helpers and style builders.
//!
//! Extends `akyljer_config::Theme` with helpers for building ratatui
//! `Style` values consistently across screens.

use akyljer_client::RecordStatus;
use akyljer_config::Theme;
use ratatui::style::{Modifier, Style};

/// Braille spinner frames for the loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Spinner character for an animation frame.
///
/// ```
/// use akyljer_tui::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(0), spinner_char(8));
/// ```
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Style helpers on top of the palette.
pub trait ThemeExt {
    fn text(&self) -> Style;
    fn text_dim(&self) -> Style;
    /// Accent + bold.
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    fn border_focused(&self) -> Style;
    /// Selected row.
    fn highlight(&self) -> Style;
    fn success(&self) -> Style;
    fn warning(&self) -> Style;
    fn error(&self) -> Style;
    fn info(&self) -> Style;
    fn disabled(&self) -> Style;
    fn table_header(&self) -> Style;
    /// Colour of a workflow status badge.
    fn status(&self, status: RecordStatus) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn status(&self, status: RecordStatus) -> Style {
        let color = match status {
            RecordStatus::New => self.status_new,
            RecordStatus::InProgress => self.status_in_progress,
            RecordStatus::Resolved => self.status_resolved,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use akyljer_config::ColorTheme;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_char(0), '⠋');
        assert_eq!(spinner_char(7), '⠧');
        assert_eq!(spinner_char(8), '⠋');
        assert_eq!(spinner_char(u8::MAX), SPINNER_CHARS[255 % 8]);
    }

    #[test]
    fn test_status_colours_are_distinct() {
        let theme = Theme::from(ColorTheme::Default);
        let new = theme.status(RecordStatus::New);
        let in_progress = theme.status(RecordStatus::InProgress);
        let resolved = theme.status(RecordStatus::Resolved);
        assert_ne!(new, in_progress);
        assert_ne!(in_progress, resolved);
    }
}
