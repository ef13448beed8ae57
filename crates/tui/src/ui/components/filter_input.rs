//! Single-line editor for the free-text list filter.

use akyljer_config::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::{Input, InputRequest};

use crate::ui::theme::ThemeExt;

/// Editor over `tui_input::Input`, labelled with the filter it edits.
#[derive(Debug, Clone)]
pub struct FilterInput {
    label: &'static str,
    input: Input,
}

impl FilterInput {
    /// Start editing, prefilled with the current filter value.
    pub fn new(label: &'static str, value: Option<&str>) -> Self {
        Self {
            label,
            input: Input::new(value.unwrap_or_default().to_string()),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// The value to filter by; blank input clears the filter.
    pub fn committed(&self) -> Option<String> {
        let value = self.input.value().trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('u') => {
                    self.input.handle(InputRequest::DeleteLine);
                }
                KeyCode::Left => {
                    self.input.handle(InputRequest::GoToPrevWord);
                }
                KeyCode::Right => {
                    self.input.handle(InputRequest::GoToNextWord);
                }
                _ => {}
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };
        if let Some(r) = req {
            self.input.handle(r);
        }
    }

    /// Draw the editor in `area` and place the terminal cursor.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let prefix = format!("{}: ", self.label);
        let line = Line::from(vec![
            Span::styled(prefix.clone(), theme.title()),
            Span::styled(self.input.value(), theme.text()),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_focused())
            .title(" Enter apply | Esc cancel ");
        f.render_widget(Paragraph::new(line).block(block), area);

        let x = area.x + 1 + prefix.chars().count() as u16 + self.input.visual_cursor() as u16;
        f.set_cursor_position(Position::new(
            x.min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = FilterInput::new("Search", None);
        for c in "Almass".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "Almas");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_prefilled_value_and_clear_line() {
        let mut input = FilterInput::new("Crop type", Some("wheat"));
        assert_eq!(input.committed().as_deref(), Some("wheat"));
        input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "");
        assert_eq!(input.committed(), None);
    }

    #[test]
    fn test_whitespace_commits_as_none() {
        let mut input = FilterInput::new("Search", None);
        input.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(input.committed(), None);
    }
}
