//! Theme palettes.

use quickfund_core::theme::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by every render path, resolved from the active [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

const LIGHT: Palette = Palette {
    bg: Color::Rgb(248, 250, 252),
    fg: Color::Rgb(15, 23, 42),
    muted: Color::Rgb(100, 116, 139),
    border: Color::Rgb(203, 213, 225),
    accent: Color::Rgb(37, 99, 235),
    accent_alt: Color::Rgb(5, 150, 105),
    success: Color::Rgb(22, 163, 74),
    warning: Color::Rgb(217, 119, 6),
    error: Color::Rgb(220, 38, 38),
};

const DARK: Palette = Palette {
    bg: Color::Rgb(15, 23, 42),
    fg: Color::Rgb(241, 245, 249),
    muted: Color::Rgb(148, 163, 184),
    border: Color::Rgb(51, 65, 85),
    accent: Color::Rgb(96, 165, 250),
    accent_alt: Color::Rgb(52, 211, 153),
    success: Color::Rgb(74, 222, 128),
    warning: Color::Rgb(251, 191, 36),
    error: Color::Rgb(248, 113, 113),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn strong(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Inverted accent block used for the selected tab, card or button.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
