//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── language / theme        (display settings)
//! │   ├── auth: AuthState         (signed-in session)
//! │   ├── landing: LandingState   (current section, feature card, scroll)
//! │   ├── testimonials            (carousel index)
//! │   ├── contact: ContactState   (contact form)
//! │   ├── toast: ToastState       (status message)
//! │   ├── task_seq: TaskSeq       (async task id generator)
//! │   └── tasks: Tasks            (task lifecycle state)
//! └── overlay: Option<Overlay>    (auth modal, pickers)
//! ```
//!
//! ## Split State Architecture
//!
//! State is split between `TuiState` (non-overlay) and `Option<Overlay>`.
//! This allows overlay handlers to get `&mut self` and `&mut TuiState`
//! simultaneously.

use quickfund_core::config::Config;
use quickfund_core::i18n::Language;
use quickfund_core::theme::Theme;

use crate::auth::AuthState;
use crate::common::{TaskSeq, Tasks};
use crate::contact::ContactState;
use crate::landing::LandingState;
use crate::overlays::Overlay;
use crate::testimonials::TestimonialsState;
use crate::toast::ToastState;

// ============================================================================
// AppState (Combined State)
// ============================================================================

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }
}

// ============================================================================
// TuiState
// ============================================================================

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Configuration the session started with.
    pub config: Config,
    pub language: Language,
    pub theme: Theme,
    pub auth: AuthState,
    pub landing: LandingState,
    pub testimonials: TestimonialsState,
    pub contact: ContactState,
    pub toast: ToastState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    /// Tick counter for the submit spinner.
    pub tick: u64,
    /// Last known terminal size (width, height).
    pub terminal_size: (u16, u16),
    /// Which auth backend answers (`http` or `demo`), shown in the footer.
    pub auth_backend: &'static str,
}

impl TuiState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            language: config.language,
            theme: config.theme,
            config,
            auth: AuthState::default(),
            landing: LandingState::default(),
            testimonials: TestimonialsState::default(),
            contact: ContactState::default(),
            toast: ToastState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            tick: 0,
            terminal_size: (0, 0),
            auth_backend: "demo",
        }
    }
}
