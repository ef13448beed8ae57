//! Theme types.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Expand a `ColorTheme` into the runtime `Theme` palette.
//!
//! Invariants:
//! - `ColorTheme` is the configured representation; `Theme` is runtime only and not serializable.
//! - Colors are semantically named so screens never hard-code a color.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    HighContrast,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Parse a theme name as accepted on the command line and in the environment.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "default" => Some(Self::Default),
            "light" => Some(Self::Light),
            "high_contrast" => Some(Self::HighContrast),
            _ => None,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,

    // Tables
    pub table_header_fg: Color,
    pub table_header_bg: Color,

    // Status badges
    pub status_new: Color,
    pub status_in_progress: Color,
    pub status_resolved: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,
                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
                disabled: Color::DarkGray,
                table_header_fg: Color::Cyan,
                table_header_bg: Color::DarkGray,
                status_new: Color::Blue,
                status_in_progress: Color::Yellow,
                status_resolved: Color::Green,
            },
            ColorTheme::Light => Self {
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,
                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
                disabled: Color::Gray,
                table_header_fg: Color::Black,
                table_header_bg: Color::Gray,
                status_new: Color::Blue,
                status_in_progress: Color::Magenta,
                status_resolved: Color::Green,
            },
            ColorTheme::HighContrast => Self {
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::Yellow,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
                info: Color::LightCyan,
                disabled: Color::Gray,
                table_header_fg: Color::Black,
                table_header_bg: Color::White,
                status_new: Color::LightCyan,
                status_in_progress: Color::LightYellow,
                status_resolved: Color::LightGreen,
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ColorTheme::Default.into()
    }
}
