//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render function.
//!
//! ## Module Structure
//!
//! - `auth_modal.rs`: Sign in / sign up form
//! - `language_picker.rs`: Language selection picker
//! - `feature_detail.rs`: Long-form feature description
//! - `render_utils.rs`: Shared rendering utilities for overlays

pub mod auth_modal;
pub mod feature_detail;
pub mod language_picker;
pub mod render_utils;

pub use auth_modal::{AuthModalState, SubmitPhase};
use crossterm::event::KeyEvent;
pub use feature_detail::FeatureDetailState;
pub use language_picker::LanguagePickerState;
use quickfund_core::auth::AuthMode;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::common::TaskId;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;
use crate::style::Palette;

// ============================================================================
// OverlayRequest / OverlayTransition / OverlayUpdate
// ============================================================================

/// Requests to open a new overlay.
#[derive(Debug)]
pub enum OverlayRequest {
    Auth(AuthMode),
    LanguagePicker,
    FeatureDetail { index: usize },
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
    Open(OverlayRequest),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self::new(OverlayTransition::Open(request))
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    Auth(AuthModalState),
    LanguagePicker(LanguagePickerState),
    FeatureDetail(FeatureDetailState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState, palette: &Palette) {
        match self {
            Overlay::Auth(m) => m.render(frame, area, tui, palette),
            Overlay::LanguagePicker(p) => p.render(frame, area, tui, palette),
            Overlay::FeatureDetail(d) => d.render(frame, area, palette),
        }
    }

    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Auth(m) => m.handle_key(tui, key),
            Overlay::LanguagePicker(p) => p.handle_key(tui, key),
            Overlay::FeatureDetail(d) => d.handle_key(key),
        }
    }

    /// Bracketed paste goes to the focused text field, if the overlay has one.
    pub fn handle_paste(&mut self, text: &str) {
        if let Overlay::Auth(m) = self {
            m.handle_paste(text);
        }
    }

    pub fn as_auth_mut(&mut self) -> Option<&mut AuthModalState> {
        match self {
            Overlay::Auth(m) => Some(m),
            _ => None,
        }
    }
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

/// Extension trait for `Option<Overlay>` providing convenience helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState, palette: &Palette);

    /// Task id of the auth submission the open modal is waiting on, if any.
    fn auth_submit_task(&self) -> Option<TaskId>;
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState, palette: &Palette) {
        if let Some(overlay) = self {
            overlay.render(frame, area, tui, palette);
        }
    }

    fn auth_submit_task(&self) -> Option<TaskId> {
        match self {
            Some(Overlay::Auth(m)) => m.submitting_task(),
            _ => None,
        }
    }
}

/// Routes a key to the active overlay. Returns `None` when no overlay is open.
pub fn handle_overlay_key(
    tui: &mut TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|o| o.handle_key(tui, key))
}

#[cfg(test)]
mod tests {
    use quickfund_core::i18n::Language;

    use super::*;

    #[test]
    fn test_auth_submit_task_only_while_submitting() {
        let (modal, _) = AuthModalState::open(AuthMode::Login);
        assert_eq!(Some(Overlay::Auth(modal)).auth_submit_task(), None);

        let (mut modal, _) = AuthModalState::open(AuthMode::Login);
        modal.phase = SubmitPhase::Submitting { task: TaskId(4) };
        assert_eq!(Some(Overlay::Auth(modal)).auth_submit_task(), Some(TaskId(4)));

        let (picker, _) = LanguagePickerState::open(Language::En);
        assert_eq!(Some(Overlay::LanguagePicker(picker)).auth_submit_task(), None);
    }
}
