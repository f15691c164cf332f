//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use quickfund_core::auth::DemoAuthBackend;
use quickfund_core::content::FOOTER;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::common::truncate_with_ellipsis;
use crate::landing::render_section;
use crate::navbar::{NAVBAR_HEIGHT, render_navbar};
use crate::overlays::OverlayExt;
use crate::state::{AppState, TuiState};
use crate::style::Palette;
use crate::toast::render_toast;

const TOAST_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let palette = Palette::for_theme(state.theme);

    frame.render_widget(Block::default().style(palette.base()), area);

    let [navbar, body, toast, footer] = page_layout(area);

    render_navbar(frame, navbar, state, &palette);
    render_section(frame, body, state, &palette);
    render_toast(frame, toast, &state.toast, &palette);
    render_footer(frame, footer, state, &palette);

    app.overlay.render(frame, area, state, &palette);
}

fn page_layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(TOAST_HEIGHT),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area)
}

/// Area the current section is drawn into on a terminal of `area`.
pub fn body_area(area: Rect) -> Rect {
    page_layout(area)[1]
}

fn key_hints(state: &TuiState) -> &'static str {
    if state.contact.editing {
        "Tab next field · Ctrl-S send · Esc done"
    } else if state.auth.is_signed_in() {
        "Tab sections · 1-6 jump · g language · t theme · o sign out · q quit"
    } else {
        "Tab sections · 1-6 jump · g language · t theme · l sign in · s sign up · q quit"
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &TuiState, palette: &Palette) {
    let mut right = format!("auth: {}", state.auth_backend);
    if state.auth_backend == "demo" && !state.auth.is_signed_in() {
        right = format!(
            "{right} ({} / {})",
            DemoAuthBackend::DEMO_EMAIL,
            DemoAuthBackend::DEMO_PASSWORD
        );
    }

    let width = area.width as usize;
    let hints = key_hints(state);
    let line = if width >= hints.len() + right.len() + FOOTER.len() + 6 {
        Line::from(vec![
            Span::styled(FOOTER, palette.dim()),
            Span::raw("   "),
            Span::styled(hints, palette.text()),
            Span::raw("   "),
            Span::styled(right, palette.dim()),
        ])
    } else {
        Line::from(Span::styled(
            truncate_with_ellipsis(hints, width),
            palette.text(),
        ))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
