use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{ToastLevel, ToastState};
use crate::common::truncate_with_ellipsis;
use crate::style::Palette;

pub fn render_toast(frame: &mut Frame, area: Rect, toasts: &ToastState, palette: &Palette) {
    let Some(toast) = toasts.current() else {
        return;
    };
    let (icon, color) = match toast.level {
        ToastLevel::Info => ("ℹ", palette.accent),
        ToastLevel::Success => ("✓", palette.success),
        ToastLevel::Error => ("✗", palette.error),
    };
    let text = truncate_with_ellipsis(&toast.message, area.width.saturating_sub(4) as usize);
    let line = Line::from(vec![
        Span::styled(
            format!("{icon} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
