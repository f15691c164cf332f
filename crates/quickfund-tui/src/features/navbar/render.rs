use quickfund_core::content::BRAND;
use quickfund_core::i18n::translate;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::features::landing::Section;
use crate::state::TuiState;
use crate::style::Palette;

/// Navbar height including its bottom border.
pub const NAVBAR_HEIGHT: u16 = 2;

pub fn render_navbar(frame: &mut Frame, area: Rect, tui: &TuiState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let right = account_spans(tui, palette);
    let right_width: u16 = right.iter().map(|s| s.width() as u16).sum();
    let [left_area, right_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(right_width)])
        .areas(inner);

    let mut left = vec![
        Span::styled(" ◆ ", Style::default().fg(palette.accent_alt)),
        Span::styled(BRAND, palette.heading()),
        Span::raw("  "),
    ];
    for (i, section) in Section::all().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section.label(tui.language));
        let style = if *section == tui.landing.section {
            palette.selected()
        } else {
            palette.text()
        };
        left.push(Span::styled(label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), left_area);
    frame.render_widget(Paragraph::new(Line::from(right)), right_area);
}

fn account_spans(tui: &TuiState, palette: &Palette) -> Vec<Span<'static>> {
    let theme_icon = if tui.theme.is_dark() { "☾" } else { "☀" };
    let mut spans = vec![
        Span::styled(format!("g {} ", tui.language.native_name()), palette.dim()),
        Span::styled(format!("t {theme_icon} "), palette.dim()),
    ];
    match tui.auth.user_name() {
        Some(name) => {
            spans.push(Span::styled(format!(" {name} "), palette.strong()));
            spans.push(Span::styled("o logout ", palette.dim()));
        }
        None => {
            spans.push(Span::styled(
                format!(" l {} ", translate(tui.language, "nav.login")),
                Style::default().fg(palette.accent),
            ));
            spans.push(Span::styled(
                format!(" s {} ", translate(tui.language, "nav.signup")),
                palette.selected(),
            ));
        }
    }
    spans
}
