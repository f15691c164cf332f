use crossterm::event::{KeyCode, KeyEvent};
use quickfund_core::content::{FEATURES, Feature};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use crate::effects::UiEffect;
use crate::style::Palette;

/// Long-form description of one feature card.
#[derive(Debug, Clone)]
pub struct FeatureDetailState {
    pub index: usize,
}

impl FeatureDetailState {
    pub fn open(index: usize) -> (Self, Vec<UiEffect>) {
        let index = index.min(FEATURES.len() - 1);
        (Self { index }, vec![])
    }

    pub fn feature(&self) -> &'static Feature {
        &FEATURES[self.index.min(FEATURES.len() - 1)]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => OverlayUpdate::close(),
            KeyCode::Right => {
                self.index = (self.index + 1) % FEATURES.len();
                OverlayUpdate::stay()
            }
            KeyCode::Left => {
                self.index = (self.index + FEATURES.len() - 1) % FEATURES.len();
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay};

        let feature = self.feature();
        let hints = [
            InputHint::new("←→", "browse"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: feature.title,
                border_color: palette.accent,
                width: 70,
                height: 14,
                hints: &hints,
            },
            palette,
        );
        let lines = vec![
            Line::from(Span::styled(feature.description, palette.strong())),
            Line::default(),
            Line::from(Span::styled(feature.details, palette.text())),
            Line::default(),
            Line::from(Span::styled(
                format!("{} of {}", self.index + 1, FEATURES.len()),
                palette.dim(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), layout.body);
    }
}
