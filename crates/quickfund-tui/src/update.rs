//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::features::toast::Toast;
use crate::mutations::{SettingsMutation, StateMutation};
use crate::overlays::{self, Overlay, OverlayExt};
use crate::state::{AppState, TuiState};
use crate::{auth, contact, landing};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.tick = app.tui.tick.wrapping_add(1);
            app.tui.toast.tick();
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.tui.terminal_size = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            // A submission the modal no longer waits on (closed or replaced
            // before the runtime reported the spawn) is cancelled right away.
            if kind == TaskKind::AuthSubmit && app.overlay.auth_submit_task() != Some(started.id)
            {
                tracing::debug!(task = ?started.id, "cancelling orphaned auth submission");
                return vec![UiEffect::CancelTask {
                    kind,
                    token: started.cancel,
                }];
            }
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, task = ?completed.id, "dropping stale task result");
                vec![]
            }
        }
        UiEvent::Auth(auth_event) => handle_auth_event(app, auth_event),
        UiEvent::OpenUrlFailed { url, error } => {
            tracing::warn!(%url, %error, "failed to open link");
            app.tui
                .toast
                .show(Toast::error(format!("Could not open {url}")));
            vec![]
        }
    }
}

fn handle_auth_event(app: &mut AppState, event: AuthUiEvent) -> Vec<UiEffect> {
    match event {
        AuthUiEvent::Completed { task, mode, result } => {
            if app.overlay.auth_submit_task() != Some(task) {
                return vec![];
            }
            let (mutations, action) = auth::handle_auth_result(mode, result);
            apply_mutations(&mut app.tui, mutations);
            match action {
                auth::AuthModalAction::Close => {
                    app.overlay = None;
                }
                auth::AuthModalAction::ShowError(error) => {
                    if let Some(modal) = app.overlay.as_mut().and_then(Overlay::as_auth_mut) {
                        modal.fail_submit(error);
                    }
                }
            }
            vec![]
        }
        AuthUiEvent::Cancelled { task } => {
            tracing::debug!(?task, "auth submission cancelled");
            vec![]
        }
        AuthUiEvent::LoggedOut { result } => {
            let mutations = auth::handle_logout_result(result);
            apply_mutations(&mut app.tui, mutations);
            vec![]
        }
    }
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Auth(mutation) => tui.auth.apply(mutation),
            StateMutation::Settings(mutation) => apply_settings_mutation(tui, mutation),
            StateMutation::Toast(toast) => tui.toast.show(toast),
        }
    }
}

fn apply_settings_mutation(tui: &mut TuiState, mutation: SettingsMutation) {
    match mutation {
        SettingsMutation::SetLanguage(language) => {
            tracing::info!(language = language.code(), "language changed");
            tui.language = language;
        }
        SettingsMutation::ToggleTheme => {
            tui.theme.toggle();
        }
    }
}

// ============================================================================
// Overlay transitions
// ============================================================================

/// Cancels the auth submission the current overlay is waiting on, if any.
fn cancel_pending_submit(app: &mut AppState) -> Option<UiEffect> {
    let task = app.overlay.auth_submit_task()?;
    let slot = &mut app.tui.tasks.auth_submit;
    let token = if slot.active == Some(task) {
        slot.cancel.take()
    } else {
        None
    };
    slot.clear();
    Some(UiEffect::CancelTask {
        kind: TaskKind::AuthSubmit,
        token,
    })
}

fn apply_overlay_update(app: &mut AppState, update: overlays::OverlayUpdate) -> Vec<UiEffect> {
    let mut effects = update.effects;
    match update.transition {
        overlays::OverlayTransition::Stay => {}
        overlays::OverlayTransition::Close => {
            effects.extend(cancel_pending_submit(app));
            app.overlay = None;
        }
        overlays::OverlayTransition::Open(request) => {
            effects.extend(cancel_pending_submit(app));
            effects.extend(open_overlay_request(app, request));
        }
    }
    effects
}

fn open_overlay_request(app: &mut AppState, request: overlays::OverlayRequest) -> Vec<UiEffect> {
    match request {
        overlays::OverlayRequest::Auth(mode) => {
            let (state, effects) = overlays::AuthModalState::open(mode);
            app.overlay = Some(Overlay::Auth(state));
            effects
        }
        overlays::OverlayRequest::LanguagePicker => {
            let (state, effects) = overlays::LanguagePickerState::open(app.tui.language);
            app.overlay = Some(Overlay::LanguagePicker(state));
            effects
        }
        overlays::OverlayRequest::FeatureDetail { index } => {
            let (state, effects) = overlays::FeatureDetailState::open(index);
            app.overlay = Some(Overlay::FeatureDetail(state));
            effects
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if let Some(overlay) = app.overlay.as_mut() {
                overlay.handle_paste(&text);
            } else if app.tui.contact.editing {
                contact::handle_paste(&mut app.tui.contact, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere except overlays, which treat it as cancel.
    if app.overlay.is_none()
        && key.code == KeyCode::Char('c')
        && key.modifiers.contains(KeyModifiers::CONTROL)
    {
        return vec![UiEffect::Quit];
    }

    // Try to dispatch to the active overlay
    if let Some(mut update) = overlays::handle_overlay_key(&mut app.tui, &mut app.overlay, key) {
        apply_mutations(&mut app.tui, std::mem::take(&mut update.mutations));
        return apply_overlay_update(app, update);
    }

    if app.tui.contact.editing {
        let mutations = contact::handle_edit_key(&mut app.tui.contact, key);
        apply_mutations(&mut app.tui, mutations);
        return vec![];
    }

    let (effects, mutations, overlay_request) = landing::handle_main_key(&mut app.tui, key);
    apply_mutations(&mut app.tui, mutations);
    if let Some(request) = overlay_request
        && app.overlay.is_none()
    {
        let mut overlay_effects = open_overlay_request(app, request);
        overlay_effects.extend(effects);
        return overlay_effects;
    }

    effects
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use quickfund_core::auth::{AuthMode, Field, Role, Session, User};
    use quickfund_core::config::Config;
    use quickfund_core::content::CONTACT_SENT_MESSAGE;
    use quickfund_core::theme::Theme;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};
    use crate::effects::AuthRequest;
    use crate::landing::Section;
    use crate::overlays::SubmitPhase;

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn session(name: &str) -> Session {
        Session {
            user: User {
                id: "u1".into(),
                email: "asha@example.in".into(),
                name: name.into(),
                role: Role::Donor,
                phone: None,
                avatar: None,
                created_at: Utc::now(),
            },
            token: "token".into(),
        }
    }

    fn modal(app: &mut AppState) -> &mut overlays::AuthModalState {
        app.overlay
            .as_mut()
            .and_then(Overlay::as_auth_mut)
            .expect("auth modal open")
    }

    /// Opens the login modal with valid credentials, submits, and reports the
    /// spawn the way the runtime would. Returns the task id and its token.
    fn submit_login(app: &mut AppState) -> (TaskId, CancellationToken) {
        update(app, key(KeyCode::Char('l')));
        let form = &mut modal(app).form;
        form.email = "asha@example.in".into();
        form.password = "secret12".into();

        let effects = update(app, key(KeyCode::Enter));
        let [UiEffect::SubmitAuth {
            task: Some(task),
            request: AuthRequest::Login(_),
        }] = effects.as_slice()
        else {
            panic!("expected SubmitAuth, got {effects:?}");
        };
        let task = *task;
        let token = CancellationToken::new();
        update(
            app,
            UiEvent::TaskStarted {
                kind: TaskKind::AuthSubmit,
                started: TaskStarted {
                    id: task,
                    cancel: Some(token.clone()),
                },
            },
        );
        (task, token)
    }

    fn completed(task: TaskId, result: Result<Session, String>) -> UiEvent {
        UiEvent::TaskCompleted {
            kind: TaskKind::AuthSubmit,
            completed: TaskCompleted {
                id: task,
                result: Box::new(UiEvent::Auth(AuthUiEvent::Completed {
                    task,
                    mode: AuthMode::Login,
                    result,
                })),
            },
        }
    }

    #[test]
    fn test_successful_submit_signs_in_and_closes_modal() {
        let mut app = AppState::new(Config::default());
        let (task, _) = submit_login(&mut app);
        assert!(app.tui.tasks.auth_submit.is_running());

        update(&mut app, completed(task, Ok(session("Asha"))));

        assert!(app.overlay.is_none());
        assert_eq!(app.tui.auth.user_name(), Some("Asha"));
        assert!(!app.tui.tasks.auth_submit.is_running());
        assert_eq!(
            app.tui.toast.current().map(|t| t.message.as_str()),
            Some("Welcome back, Asha!")
        );
    }

    #[test]
    fn test_failed_submit_keeps_modal_open_with_banner() {
        let mut app = AppState::new(Config::default());
        let (task, _) = submit_login(&mut app);

        update(
            &mut app,
            completed(task, Err("Login failed: Invalid email or password".into())),
        );

        let modal = modal(&mut app);
        assert_eq!(modal.phase, SubmitPhase::Editing);
        assert_eq!(
            modal.submit_error.as_deref(),
            Some("Login failed: Invalid email or password")
        );
        assert_eq!(modal.form.email, "asha@example.in");
        assert!(!app.tui.auth.is_signed_in());
    }

    #[test]
    fn test_closing_modal_cancels_and_late_result_is_ignored() {
        let mut app = AppState::new(Config::default());
        let (task, token) = submit_login(&mut app);

        let effects = update(&mut app, key(KeyCode::Esc));
        assert!(app.overlay.is_none());
        let [UiEffect::CancelTask {
            kind: TaskKind::AuthSubmit,
            token: Some(cancel),
        }] = effects.as_slice()
        else {
            panic!("expected CancelTask, got {effects:?}");
        };
        cancel.cancel();
        assert!(token.is_cancelled());
        assert!(!app.tui.tasks.auth_submit.is_running());

        let effects = update(&mut app, completed(task, Ok(session("Asha"))));
        assert!(effects.is_empty());
        assert!(app.overlay.is_none());
        assert!(!app.tui.auth.is_signed_in());
        assert!(app.tui.toast.current().is_none());
    }

    #[test]
    fn test_reopened_modal_ignores_result_of_previous_submission() {
        let mut app = AppState::new(Config::default());
        let (task, _) = submit_login(&mut app);
        update(&mut app, key(KeyCode::Esc));
        update(&mut app, key(KeyCode::Char('l')));

        update(&mut app, completed(task, Err("Login failed: boom".into())));

        let modal = modal(&mut app);
        assert!(modal.submit_error.is_none());
        assert!(modal.form.email.is_empty());
    }

    #[test]
    fn test_task_started_after_close_is_cancelled() {
        let mut app = AppState::new(Config::default());
        update(&mut app, key(KeyCode::Char('l')));
        let form = &mut modal(&mut app).form;
        form.email = "asha@example.in".into();
        form.password = "secret12".into();
        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::SubmitAuth { task: Some(task), .. }] = effects.as_slice() else {
            panic!("expected SubmitAuth");
        };
        let task = *task;

        update(&mut app, key(KeyCode::Esc));
        let token = CancellationToken::new();
        let effects = update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::AuthSubmit,
                started: TaskStarted {
                    id: task,
                    cancel: Some(token),
                },
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CancelTask { token: Some(_), .. }]
        ));
        assert!(!app.tui.tasks.auth_submit.is_running());
    }

    #[test]
    fn test_invalid_submit_shows_errors_without_effects() {
        let mut app = AppState::new(Config::default());
        update(&mut app, key(KeyCode::Char('s')));
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        let modal = modal(&mut app);
        assert_eq!(modal.errors.get(Field::Name), Some("Name is required"));
        assert_eq!(modal.errors.get(Field::Role), Some("Please select a role"));
        assert_eq!(modal.phase, SubmitPhase::Editing);
    }

    #[test]
    fn test_signup_to_login_toggle_keeps_credentials() {
        let mut app = AppState::new(Config::default());
        update(&mut app, key(KeyCode::Char('s')));
        let form = &mut modal(&mut app).form;
        form.email = "asha@example.in".into();
        form.password = "secret12".into();
        form.name = "Asha".into();

        update(&mut app, ctrl('t'));

        let modal = modal(&mut app);
        assert_eq!(modal.mode, AuthMode::Login);
        assert_eq!(modal.form.email, "asha@example.in");
        assert_eq!(modal.form.password, "secret12");
    }

    #[test]
    fn test_error_keys_stay_within_visible_fields() {
        let mut app = AppState::new(Config::default());
        update(&mut app, key(KeyCode::Char('s')));
        update(&mut app, key(KeyCode::Enter));
        for event in [ctrl('t'), key(KeyCode::Enter), ctrl('t')] {
            update(&mut app, event);
            let modal = modal(&mut app);
            let visible = modal.visible_fields();
            assert!(modal.errors.fields().all(|f| visible.contains(&f)));
        }
    }

    #[test]
    fn test_logout_signs_out_and_reports_failure() {
        let mut app = AppState::new(Config::default());
        app.tui.auth.session = Some(session("Asha"));

        let effects = update(&mut app, key(KeyCode::Char('o')));
        let [UiEffect::Logout { task: Some(task), .. }] = effects.as_slice() else {
            panic!("expected Logout effect");
        };
        assert!(!app.tui.auth.is_signed_in());

        let task = *task;
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Logout,
                started: TaskStarted {
                    id: task,
                    cancel: None,
                },
            },
        );
        update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Logout,
                completed: TaskCompleted {
                    id: task,
                    result: Box::new(UiEvent::Auth(AuthUiEvent::LoggedOut {
                        result: Err("Logout failed: session is not active".into()),
                    })),
                },
            },
        );
        assert_eq!(
            app.tui.toast.current().map(|t| t.message.as_str()),
            Some("Logout failed: session is not active")
        );
    }

    #[test]
    fn test_contact_form_submit_shows_toast() {
        let mut app = AppState::new(Config::default());
        update(&mut app, key(KeyCode::Char('6')));
        assert_eq!(app.tui.landing.section, Section::Contact);
        update(&mut app, key(KeyCode::Enter));
        assert!(app.tui.contact.editing);

        for text in ["Meera", "Iyer", "meera@example.in"] {
            for c in text.chars() {
                update(&mut app, key(KeyCode::Char(c)));
            }
            update(&mut app, key(KeyCode::Tab));
        }
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Tab));
        for c in "Need help".chars() {
            update(&mut app, key(KeyCode::Char(c)));
        }
        update(&mut app, key(KeyCode::Enter));

        assert!(!app.tui.contact.editing);
        assert_eq!(
            app.tui.toast.current().map(|t| t.message.as_str()),
            Some(CONTACT_SENT_MESSAGE)
        );
    }

    #[test]
    fn test_language_picker_and_theme_toggle() {
        let mut app = AppState::new(Config::default());
        update(&mut app, key(KeyCode::Char('g')));
        assert!(matches!(app.overlay, Some(Overlay::LanguagePicker(_))));
        update(&mut app, key(KeyCode::Down));
        update(&mut app, key(KeyCode::Enter));
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.language.code(), "hi");

        update(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.tui.theme, Theme::Dark);
    }

    #[test]
    fn test_ctrl_c_quits_when_no_overlay() {
        let mut app = AppState::new(Config::default());
        let effects = update(&mut app, ctrl('c'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_tick_expires_toast() {
        let mut app = AppState::new(Config::default());
        app.tui.toast.show(Toast::info("hello"));
        for _ in 0..crate::features::toast::TOAST_TICKS {
            update(&mut app, UiEvent::Tick);
        }
        assert!(app.tui.toast.current().is_none());
    }
}
