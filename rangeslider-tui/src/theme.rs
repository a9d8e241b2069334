//! Neon-on-charcoal theme tokens for the range slider host
//!
//! # Color Palette
//! - **Background**: Deep charcoal
//! - **Accent**: Electric cyan (connect fill, focus)
//! - **Handle**: White (slider handles)
//! - **Track**: Slate (unfilled track)
//! - **Tooltip**: Neon green (handle values)
//! - **Pip**: Cool purple (tick marks and labels)
//! - **Warning / Negative**: Neon orange / hot pink (status line)
//! - **Muted**: Steel blue (disabled slider, hints)

use ratatui::style::{Color, Style};

use crate::app::StatusLevel;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub handle: Color,
    pub track: Color,
    pub tooltip: Color,
    pub pip: Color,
    pub warning: Color,
    pub negative: Color,
    pub muted: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    pub fn neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            handle: Color::White,
            track: Color::Rgb(90, 100, 120),
            tooltip: Color::Rgb(0, 255, 128),
            pip: Color::Rgb(147, 112, 219),
            warning: Color::Rgb(255, 140, 0),
            negative: Color::Rgb(255, 20, 147),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    pub fn status_color(&self, level: StatusLevel) -> Color {
        match level {
            StatusLevel::Info => self.accent,
            StatusLevel::Warning => self.warning,
            StatusLevel::Error => self.negative,
        }
    }

    /// Base style painted under the whole screen.
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}
