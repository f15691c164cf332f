//! Section bodies. Pure: reads state, draws, never mutates.

use quickfund_core::content::{
    BENEFITS, BENEFITS_BANNER_STATS, BENEFITS_BANNER_TEXT, BENEFITS_BANNER_TITLE,
    BENEFITS_SUBTITLE, BENEFITS_TITLE, CONTACT_CHANNELS, CONTACT_SUBTITLE, CONTACT_TITLE,
    EXTRA_FEATURES, FAQS, FEATURES, FEATURES_SUBTITLE, FEATURES_TITLE, HERO_BADGES,
    HERO_HIGHLIGHT, HERO_STATS, HERO_TAGLINE, IMPACT_STATS, MISSION_TEXT, MISSION_TITLE, STEPS,
    STEP_STATS, STEPS_SUBTITLE, STEPS_TITLE, Stat,
};
use quickfund_core::i18n::translate;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::Section;
use crate::contact::render_contact_form;
use crate::state::TuiState;
use crate::style::Palette;
use crate::testimonials::render_testimonials;

/// Height of the testimonial card on the About section.
const TESTIMONIAL_HEIGHT: u16 = 14;

/// Minimum width for the two-column Contact layout.
const CONTACT_SPLIT_MIN_WIDTH: u16 = 90;

pub fn render_section(frame: &mut Frame, area: Rect, tui: &TuiState, palette: &Palette) {
    let (text, widget) = section_areas(tui.landing.section, area);
    if let Some(text) = text {
        let text = pad(text);
        let paragraph = section_paragraph(tui, palette);
        let scroll = tui.landing.scroll.min(overflow(&paragraph, text));
        frame.render_widget(paragraph.scroll((scroll, 0)), text);
    }
    if let Some(widget) = widget {
        match tui.landing.section {
            Section::About => render_testimonials(frame, widget, &tui.testimonials, palette),
            Section::Contact => render_contact_form(frame, widget, &tui.contact, palette),
            _ => {}
        }
    }
}

/// Largest scroll offset that still fills the text area of the current
/// section: wrapped content height minus viewport height.
pub fn max_scroll(tui: &TuiState, area: Rect) -> u16 {
    let (text, _) = section_areas(tui.landing.section, area);
    text.map_or(0, |text| {
        let palette = Palette::for_theme(tui.theme);
        overflow(&section_paragraph(tui, &palette), pad(text))
    })
}

/// Splits a section body into its scrollable text area and the widget
/// drawn beside or below it.
fn section_areas(section: Section, area: Rect) -> (Option<Rect>, Option<Rect>) {
    match section {
        Section::About => {
            let [top, bottom] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(TESTIMONIAL_HEIGHT)])
                .areas(area);
            (Some(top), Some(bottom))
        }
        Section::Contact if area.width >= CONTACT_SPLIT_MIN_WIDTH => {
            let [left, right] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(area);
            (Some(left), Some(right))
        }
        Section::Contact => (None, Some(area)),
        _ => (Some(area), None),
    }
}

fn section_paragraph(tui: &TuiState, palette: &Palette) -> Paragraph<'static> {
    let (lines, alignment) = match tui.landing.section {
        Section::Home => (hero_lines(tui, palette), Alignment::Center),
        Section::About => (about_lines(palette), Alignment::Center),
        Section::Features => (feature_lines(tui, palette), Alignment::Left),
        Section::HowItWorks => (step_lines(palette), Alignment::Left),
        Section::Benefits => (benefit_lines(palette), Alignment::Left),
        Section::Contact => (contact_lines(palette), Alignment::Left),
    };
    Paragraph::new(lines)
        .alignment(alignment)
        .wrap(Wrap { trim: false })
}

fn overflow(paragraph: &Paragraph<'_>, area: Rect) -> u16 {
    let rows = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
    rows.saturating_sub(area.height)
}

fn pad(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(1),
    )
}

fn heading(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), palette.heading()))
}

fn paragraph(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), palette.dim()))
}

fn stat_row(stats: &[Stat], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, stat) in stats.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   │   ", palette.dim()));
        }
        spans.push(Span::styled(stat.value, palette.strong()));
        spans.push(Span::styled(format!(" {}", stat.label), palette.dim()));
    }
    Line::from(spans)
}

fn hero_lines(tui: &TuiState, palette: &Palette) -> Vec<Line<'static>> {
    let lang = tui.language;
    let badges: Vec<Span> = HERO_BADGES
        .iter()
        .map(|b| Span::styled(format!(" ✓ {b} "), Style::default().fg(palette.accent_alt)))
        .collect();
    let cta = if let Some(name) = tui.auth.user_name() {
        Line::from(Span::styled(format!("Signed in as {name}"), palette.strong()))
    } else {
        Line::from(vec![
            Span::styled(
                format!(" Enter  {} → ", translate(lang, "hero.cta.help")),
                palette.selected(),
            ),
            Span::raw("   "),
            Span::styled(
                format!(" s  {} ", translate(lang, "hero.cta.donor")),
                Style::default().fg(palette.accent),
            ),
        ])
    };
    vec![
        Line::from(badges),
        Line::default(),
        heading(translate(lang, "hero.title"), palette),
        Line::default(),
        paragraph(translate(lang, "hero.subtitle"), palette),
        Line::default(),
        cta,
        Line::default(),
        stat_row(HERO_STATS, palette),
        Line::default(),
        Line::from(vec![
            Span::styled(HERO_HIGHLIGHT.value, Style::default().fg(palette.accent_alt)),
            Span::styled(format!(" {} · ", HERO_HIGHLIGHT.label), palette.dim()),
            Span::styled(HERO_TAGLINE, palette.dim()),
        ]),
    ]
}

fn about_lines(palette: &Palette) -> Vec<Line<'static>> {
    vec![
        heading(MISSION_TITLE, palette),
        Line::default(),
        paragraph(MISSION_TEXT, palette),
        Line::default(),
        stat_row(IMPACT_STATS, palette),
    ]
}

fn feature_lines(tui: &TuiState, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(FEATURES_TITLE, palette),
        paragraph(FEATURES_SUBTITLE, palette),
        Line::default(),
    ];
    for (i, feature) in FEATURES.iter().enumerate() {
        let selected = i == tui.landing.feature;
        let (marker, title_style) = if selected {
            ("▶ ", palette.selected())
        } else {
            ("  ", palette.strong())
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(format!(" {} ", feature.title), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", feature.description),
            palette.dim(),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(
        EXTRA_FEATURES
            .iter()
            .flat_map(|card| {
                [
                    Span::styled(format!("◆ {}", card.title), palette.text()),
                    Span::styled(format!(" ({})   ", card.description), palette.dim()),
                ]
            })
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::default());
    lines.push(paragraph("←→ select • Enter learn more", palette));
    lines
}

fn step_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(STEPS_TITLE, palette),
        paragraph(STEPS_SUBTITLE, palette),
        Line::default(),
    ];
    for (i, step) in STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:02} ", i + 1), palette.selected()),
            Span::styled(format!(" {}", step.title), palette.strong()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", step.description),
            palette.dim(),
        )));
        lines.push(Line::default());
    }
    lines.push(stat_row(STEP_STATS, palette));
    lines
}

fn benefit_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(BENEFITS_TITLE, palette),
        paragraph(BENEFITS_SUBTITLE, palette),
        Line::default(),
    ];
    for card in BENEFITS {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(palette.accent_alt)),
            Span::styled(card.title, palette.strong()),
            Span::styled(format!(" · {}", card.description), palette.dim()),
        ]));
    }
    lines.push(Line::default());
    lines.push(heading(BENEFITS_BANNER_TITLE, palette));
    lines.push(paragraph(BENEFITS_BANNER_TEXT, palette));
    lines.push(stat_row(BENEFITS_BANNER_STATS, palette));
    lines
}

fn contact_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(CONTACT_TITLE, palette),
        paragraph(CONTACT_SUBTITLE, palette),
        Line::default(),
    ];
    for channel in CONTACT_CHANNELS {
        lines.push(Line::from(Span::styled(channel.title, palette.strong())));
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", channel.note), palette.dim()),
            Span::styled(
                format!(" · {}", channel.value),
                Style::default().fg(palette.accent),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(heading("Frequently Asked Questions", palette));
    for faq in FAQS {
        lines.push(Line::from(Span::styled(faq.question, palette.text())));
        lines.push(Line::from(Span::styled(
            format!("  {}", faq.answer),
            palette.dim(),
        )));
    }
    lines
}
