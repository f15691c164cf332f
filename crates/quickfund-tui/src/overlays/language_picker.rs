use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quickfund_core::i18n::Language;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use super::OverlayUpdate;
use crate::effects::UiEffect;
use crate::features::toast::Toast;
use crate::mutations::{SettingsMutation, StateMutation};
use crate::state::TuiState;
use crate::style::Palette;

#[derive(Debug, Clone)]
pub struct LanguagePickerState {
    pub selected: usize,
}

impl LanguagePickerState {
    pub fn open(current: Language) -> (Self, Vec<UiEffect>) {
        let selected = Language::all()
            .iter()
            .position(|l| *l == current)
            .unwrap_or(0);
        (Self { selected }, vec![])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState, palette: &Palette) {
        render_language_picker(frame, self, area, tui.language, palette);
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < Language::all().len() - 1 {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                let Some(&language) = Language::all().get(self.selected) else {
                    return OverlayUpdate::close();
                };
                if language == tui.language {
                    return OverlayUpdate::close();
                }
                OverlayUpdate::close().with_mutations(vec![
                    StateMutation::Settings(SettingsMutation::SetLanguage(language)),
                    StateMutation::Toast(Toast::info(format!(
                        "Language set to {}",
                        language.native_name()
                    ))),
                ])
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_language_picker(
    frame: &mut Frame,
    picker: &LanguagePickerState,
    area: Rect,
    current: Language,
    palette: &Palette,
) {
    use super::render_utils::{InputHint, OverlayConfig, render_overlay};

    let languages = Language::all();
    let hints = [
        InputHint::new("↑↓", "navigate"),
        InputHint::new("Enter", "select"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Language",
            border_color: palette.accent_alt,
            width: 36,
            height: languages.len() as u16 + 4,
            hints: &hints,
        },
        palette,
    );

    let items: Vec<ListItem> = languages
        .iter()
        .map(|language| {
            let marker = if *language == current { " ✓" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<4}", language.code()), palette.dim()),
                Span::styled(language.native_name(), palette.text()),
                Span::styled(marker, Style::default().fg(palette.success)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(palette.accent_alt)
                .fg(palette.bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(picker.selected));
    frame.render_stateful_widget(list, layout.body, &mut list_state);
}
