use quickfund_core::contact::{ContactField, Subject};
use quickfund_core::content::{CONTACT_FORM_TITLE, CONTACT_RESPONSE_NOTE};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::ContactState;
use crate::style::Palette;

pub fn render_contact_form(frame: &mut Frame, area: Rect, contact: &ContactState, palette: &Palette) {
    let border = if contact.editing {
        palette.accent
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {CONTACT_FORM_TITLE} "))
        .title_style(palette.heading());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (index, field) in ContactField::all().iter().copied().enumerate() {
        let focused = contact.editing && index == contact.focus;
        lines.push(field_label(field, focused, palette));
        lines.push(field_value(contact, field, focused, palette));
        if let Some(error) = contact.errors.get(&field) {
            lines.push(Line::from(Span::styled(
                format!("  {error}"),
                Style::default().fg(palette.error),
            )));
        }
    }
    lines.push(Line::default());
    let hint = if contact.editing {
        "Tab next field • ←→ subject • Ctrl+S send • Esc done"
    } else {
        "Enter/e fill in the form • m email support"
    };
    lines.push(Line::from(Span::styled(hint, palette.dim())));
    lines.push(Line::from(Span::styled(CONTACT_RESPONSE_NOTE, palette.dim())));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn field_label(field: ContactField, focused: bool, palette: &Palette) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.text()
    };
    let marker = if field.is_required() { " *" } else { "" };
    Line::from(Span::styled(format!("{}{marker}", field.label()), style))
}

fn field_value(
    contact: &ContactState,
    field: ContactField,
    focused: bool,
    palette: &Palette,
) -> Line<'static> {
    let prompt = Span::styled(
        if focused { "▸ " } else { "  " },
        Style::default().fg(palette.accent),
    );
    if field == ContactField::Subject {
        let current = contact.form.subject.map_or(field.placeholder(), Subject::label);
        let style = if contact.form.subject.is_some() {
            palette.text()
        } else {
            palette.dim()
        };
        let arrows = if focused { "◂ " } else { "" };
        let tail = if focused { " ▸" } else { "" };
        return Line::from(vec![
            prompt,
            Span::styled(arrows, palette.dim()),
            Span::styled(current.to_string(), style),
            Span::styled(tail, palette.dim()),
        ]);
    }

    let value = contact.form.value(field);
    let mut spans = vec![prompt];
    if value.is_empty() {
        if focused {
            spans.push(Span::styled("█", Style::default().fg(palette.accent)));
        }
        spans.push(Span::styled(field.placeholder(), palette.dim()));
    } else {
        spans.push(Span::styled(value.replace('\n', " ⏎ "), palette.text()));
        if focused {
            spans.push(Span::styled("█", Style::default().fg(palette.accent)));
        }
    }
    Line::from(spans)
}
