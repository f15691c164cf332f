//! Key handling when no overlay is open and the contact form is not being
//! edited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quickfund_core::auth::AuthMode;
use quickfund_core::content::support_mailto;
use ratatui::layout::Rect;

use super::{Section, max_scroll};
use crate::auth;
use crate::effects::UiEffect;
use crate::mutations::{SettingsMutation, StateMutation};
use crate::overlays::OverlayRequest;
use crate::render::body_area;
use crate::state::TuiState;

/// Lines moved per `PageUp`/`PageDown`.
const PAGE_SCROLL: i32 = 8;

pub fn handle_main_key(
    tui: &mut TuiState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>) {
    if let Some(handled) = handle_section_key(tui, key) {
        return handled;
    }

    let mut effects = Vec::new();
    let mut mutations = Vec::new();
    let mut overlay = None;

    match key.code {
        KeyCode::Char('q') => effects.push(UiEffect::Quit),
        KeyCode::Tab | KeyCode::Down => {
            let next = tui.landing.section.next();
            tui.landing.go_to(next);
        }
        KeyCode::BackTab | KeyCode::Up => {
            let prev = tui.landing.section.prev();
            tui.landing.go_to(prev);
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(section) = c.to_digit(10).and_then(Section::from_number) {
                tui.landing.go_to(section);
            }
        }
        KeyCode::PageDown | KeyCode::Char('j') => scroll(tui, PAGE_SCROLL),
        KeyCode::PageUp | KeyCode::Char('k') => scroll(tui, -PAGE_SCROLL),
        KeyCode::Home => tui.landing.scroll = 0,
        KeyCode::Char('l') if !tui.auth.is_signed_in() => {
            overlay = Some(OverlayRequest::Auth(AuthMode::Login));
        }
        KeyCode::Char('s') if !tui.auth.is_signed_in() => {
            overlay = Some(OverlayRequest::Auth(AuthMode::Signup));
        }
        KeyCode::Char('o') => {
            let (logout_effects, logout_mutations) =
                auth::start_logout(&tui.auth, &tui.tasks, &mut tui.task_seq);
            effects.extend(logout_effects);
            mutations.extend(logout_mutations);
        }
        KeyCode::Char('t') => {
            mutations.push(StateMutation::Settings(SettingsMutation::ToggleTheme));
        }
        KeyCode::Char('g') => overlay = Some(OverlayRequest::LanguagePicker),
        _ => {}
    }

    (effects, mutations, overlay)
}

fn scroll(tui: &mut TuiState, delta: i32) {
    let (width, height) = tui.terminal_size;
    let max = max_scroll(tui, body_area(Rect::new(0, 0, width, height)));
    tui.landing.scroll_by(delta, max);
}

/// Keys that mean something only on the current section. Returns `None`
/// to fall through to the global bindings.
fn handle_section_key(
    tui: &mut TuiState,
    key: KeyEvent,
) -> Option<(Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>)> {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match (tui.landing.section, key.code) {
        (Section::Home, KeyCode::Enter) if !tui.auth.is_signed_in() => Some((
            vec![],
            vec![],
            Some(OverlayRequest::Auth(AuthMode::Signup)),
        )),
        (Section::About, KeyCode::Right) => {
            tui.testimonials.carousel.next();
            Some(empty())
        }
        (Section::About, KeyCode::Left) => {
            tui.testimonials.carousel.prev();
            Some(empty())
        }
        (Section::About, KeyCode::Char(c @ '1'..='9')) if alt => {
            if let Some(n) = c.to_digit(10) {
                tui.testimonials.carousel.select(n as usize - 1);
            }
            Some(empty())
        }
        (Section::Features, KeyCode::Right) => {
            tui.landing.next_feature();
            Some(empty())
        }
        (Section::Features, KeyCode::Left) => {
            tui.landing.prev_feature();
            Some(empty())
        }
        (Section::Features, KeyCode::Enter) => Some((
            vec![],
            vec![],
            Some(OverlayRequest::FeatureDetail {
                index: tui.landing.feature,
            }),
        )),
        (Section::Contact, KeyCode::Enter | KeyCode::Char('e')) => {
            tui.contact.begin_editing();
            Some(empty())
        }
        (Section::Contact, KeyCode::Char('m')) => Some((
            vec![UiEffect::OpenUrl {
                url: support_mailto(),
            }],
            vec![],
            None,
        )),
        _ => None,
    }
}

fn empty() -> (Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>) {
    (vec![], vec![], None)
}

#[cfg(test)]
mod tests {
    use quickfund_core::config::Config;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn tui() -> TuiState {
        TuiState::new(Config::default())
    }

    #[test]
    fn test_tab_and_number_keys_move_between_sections() {
        let mut tui = tui();
        handle_main_key(&mut tui, key(KeyCode::Tab));
        assert_eq!(tui.landing.section, Section::About);
        handle_main_key(&mut tui, key(KeyCode::BackTab));
        assert_eq!(tui.landing.section, Section::Home);
        handle_main_key(&mut tui, key(KeyCode::Char('5')));
        assert_eq!(tui.landing.section, Section::Benefits);
    }

    #[test]
    fn test_about_arrows_drive_carousel() {
        let mut tui = tui();
        tui.landing.go_to(Section::About);
        handle_main_key(&mut tui, key(KeyCode::Left));
        assert_eq!(tui.testimonials.carousel.index(), 2);
        handle_main_key(&mut tui, key(KeyCode::Right));
        assert_eq!(tui.testimonials.carousel.index(), 0);
        handle_main_key(&mut tui, KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT));
        assert_eq!(tui.testimonials.carousel.index(), 1);
        assert_eq!(tui.landing.section, Section::About);
    }

    #[test]
    fn test_features_enter_requests_detail() {
        let mut tui = tui();
        tui.landing.go_to(Section::Features);
        handle_main_key(&mut tui, key(KeyCode::Right));
        let (_, _, overlay) = handle_main_key(&mut tui, key(KeyCode::Enter));
        assert!(matches!(
            overlay,
            Some(OverlayRequest::FeatureDetail { index: 1 })
        ));
    }

    #[test]
    fn test_hero_enter_opens_signup() {
        let mut tui = tui();
        let (_, _, overlay) = handle_main_key(&mut tui, key(KeyCode::Enter));
        assert!(matches!(
            overlay,
            Some(OverlayRequest::Auth(AuthMode::Signup))
        ));
    }

    #[test]
    fn test_contact_keys() {
        let mut tui = tui();
        tui.landing.go_to(Section::Contact);
        let (effects, _, _) = handle_main_key(&mut tui, key(KeyCode::Char('m')));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::OpenUrl { url }] if url == "mailto:support@quickfund.com"
        ));
        handle_main_key(&mut tui, key(KeyCode::Char('e')));
        assert!(tui.contact.editing);
    }

    #[test]
    fn test_theme_and_quit_keys() {
        let mut tui = tui();
        let (_, mutations, _) = handle_main_key(&mut tui, key(KeyCode::Char('t')));
        assert!(matches!(
            mutations.as_slice(),
            [StateMutation::Settings(SettingsMutation::ToggleTheme)]
        ));
        let (effects, _, _) = handle_main_key(&mut tui, key(KeyCode::Char('q')));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_page_down_stops_at_content_end() {
        let mut tui = tui();
        tui.terminal_size = (60, 16);
        tui.landing.go_to(Section::Features);
        let max = max_scroll(&tui, body_area(Rect::new(0, 0, 60, 16)));
        assert!(max > 0);
        for _ in 0..20 {
            handle_main_key(&mut tui, key(KeyCode::PageDown));
        }
        assert_eq!(tui.landing.scroll, max);
        handle_main_key(&mut tui, key(KeyCode::PageUp));
        assert_eq!(tui.landing.scroll, max.saturating_sub(8));
    }

    #[test]
    fn test_short_section_does_not_scroll() {
        let mut tui = tui();
        tui.terminal_size = (120, 60);
        tui.landing.go_to(Section::About);
        handle_main_key(&mut tui, key(KeyCode::PageDown));
        assert_eq!(tui.landing.scroll, 0);
    }
}
