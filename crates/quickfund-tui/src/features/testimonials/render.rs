use quickfund_core::content::{Contribution, TESTIMONIALS_TITLE};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::TestimonialsState;
use crate::style::Palette;

pub fn render_testimonials(
    frame: &mut Frame,
    area: Rect,
    testimonials: &TestimonialsState,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" {TESTIMONIALS_TITLE} "))
        .title_style(palette.heading());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(current) = testimonials.current() else {
        return;
    };

    let stars = "★".repeat(usize::from(current.rating));
    let contribution = match current.contribution {
        Contribution::Received(amount) => format!("Received: {amount}"),
        Contribution::Donated(amount) => format!("Donated: {amount}"),
    };

    let dots: Vec<Span> = (0..testimonials.carousel.len())
        .map(|i| {
            if i == testimonials.carousel.index() {
                Span::styled("● ", Style::default().fg(palette.accent))
            } else {
                Span::styled("○ ", palette.dim())
            }
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(stars, Style::default().fg(palette.warning))),
        Line::default(),
        Line::from(Span::styled(format!("“{}”", current.message), palette.text())),
        Line::default(),
        Line::from(Span::styled(current.name, palette.strong())),
        Line::from(Span::styled(current.location, palette.dim())),
        Line::from(Span::styled(
            contribution,
            Style::default().fg(palette.accent_alt),
        )),
        Line::default(),
        Line::from(dots),
        Line::from(Span::styled("←→ browse • Alt+1..3 jump", palette.dim())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
