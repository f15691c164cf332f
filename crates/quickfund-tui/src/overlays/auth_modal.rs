//! Sign in / sign up modal.
//!
//! Owns the form for its lifetime: closing the modal drops the form. The
//! submit state machine is `Editing -> Submitting { task } -> (closed | Editing
//! with a banner)`; the reducer drives the second transition when the
//! backend answers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quickfund_core::auth::{
    AuthMode, Field, FieldErrors, FormData, LoginRequest, Role, SignupRequest, validate,
};
use quickfund_core::i18n::{Language, translate};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use crate::common::{TaskId, mask_secret, truncate_with_ellipsis};
use crate::effects::{AuthRequest, UiEffect};
use crate::state::TuiState;
use crate::style::Palette;

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Subtitle and separator above the field list.
const HEADER_ROWS: u16 = 2;
/// Blank line and submit button below the field list.
const FOOTER_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    Submitting { task: TaskId },
}

#[derive(Debug)]
pub struct AuthModalState {
    pub mode: AuthMode,
    pub form: FormData,
    pub errors: FieldErrors,
    /// Index into the visible field list.
    pub focus: usize,
    pub phase: SubmitPhase,
    /// Backend failure shown above the submit button.
    pub submit_error: Option<String>,
    pub show_password: bool,
}

impl AuthModalState {
    pub fn open(mode: AuthMode) -> (Self, Vec<UiEffect>) {
        let state = Self {
            mode,
            form: FormData::default(),
            errors: FieldErrors::new(),
            focus: 0,
            phase: SubmitPhase::Editing,
            submit_error: None,
            show_password: false,
        };
        (state, vec![])
    }

    pub fn visible_fields(&self) -> Vec<Field> {
        self.form.visible_fields(self.mode)
    }

    pub fn focused(&self) -> Field {
        let fields = self.visible_fields();
        fields
            .get(self.focus)
            .or_else(|| fields.last())
            .copied()
            .unwrap_or(Field::Email)
    }

    pub fn submitting_task(&self) -> Option<TaskId> {
        match self.phase {
            SubmitPhase::Submitting { task } => Some(task),
            SubmitPhase::Editing => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting_task().is_some()
    }

    /// Back to editing with the backend's message as a banner.
    pub fn fail_submit(&mut self, error: String) {
        self.phase = SubmitPhase::Editing;
        self.submit_error = Some(error);
    }

    /// Switches login/signup. Values are kept.
    pub fn toggle_mode(&mut self) {
        let focused = self.focused();
        self.mode = self.mode.toggled();
        self.submit_error = None;
        self.after_layout_change(focused);
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.is_submitting() {
            return;
        }
        let field = self.focused();
        if let Some(value) = self.form.text_mut(field) {
            value.extend(text.chars().filter(|c| !c.is_control()));
            self.errors.remove(field);
        }
    }

    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                return OverlayUpdate::close();
            }
            _ if self.is_submitting() => return OverlayUpdate::stay(),
            KeyCode::Enter => return self.submit(tui),
            KeyCode::Char('t') if ctrl => self.toggle_mode(),
            KeyCode::Char('p') if ctrl => self.show_password = !self.show_password,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.visible_fields().len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                let n = self.visible_fields().len();
                self.focus = (self.focus + n - 1) % n;
            }
            KeyCode::Left | KeyCode::Right if self.focused() == Field::Role => {
                self.cycle_role(key.code == KeyCode::Right);
            }
            KeyCode::Backspace => {
                let field = self.focused();
                if let Some(value) = self.form.text_mut(field) {
                    value.pop();
                    self.errors.remove(field);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                let field = self.focused();
                if let Some(value) = self.form.text_mut(field) {
                    value.push(c);
                    self.errors.remove(field);
                }
            }
            _ => {}
        }
        OverlayUpdate::stay()
    }

    fn submit(&mut self, tui: &mut TuiState) -> OverlayUpdate {
        self.errors = validate(&self.form, self.mode);
        if let Some(first) = self.errors.first() {
            if let Some(index) = self.visible_fields().iter().position(|f| *f == first) {
                self.focus = index;
            }
            return OverlayUpdate::stay();
        }

        let request = match self.mode {
            AuthMode::Login => AuthRequest::Login(LoginRequest::from_form(&self.form)),
            AuthMode::Signup => AuthRequest::Signup(SignupRequest::from_form(&self.form)),
        };
        let task = tui.task_seq.next_id();
        self.phase = SubmitPhase::Submitting { task };
        self.submit_error = None;
        tracing::debug!(mode = ?self.mode, ?task, "submitting auth form");
        OverlayUpdate::stay().with_ui_effects(vec![UiEffect::SubmitAuth {
            task: Some(task),
            request,
        }])
    }

    fn cycle_role(&mut self, forward: bool) {
        let all = Role::all();
        let next = match (self.form.role, forward) {
            (None, true) => all[0],
            (None, false) => all[all.len() - 1],
            (Some(role), true) => all[(role.position() + 1) % all.len()],
            (Some(role), false) => all[(role.position() + all.len() - 1) % all.len()],
        };
        self.form.role = Some(next);
        self.errors.remove(Field::Role);
        self.after_layout_change(Field::Role);
    }

    /// Keeps focus on `focused` when it is still shown, otherwise clamps it.
    /// Errors survive only on fields that are shown and still fail under the
    /// new layout.
    fn after_layout_change(&mut self, focused: Field) {
        let fields = self.visible_fields();
        let still_failing = validate(&self.form, self.mode);
        let keep: Vec<Field> = fields
            .iter()
            .copied()
            .filter(|f| still_failing.contains(*f))
            .collect();
        self.errors.retain_fields(&keep);
        self.focus = fields
            .iter()
            .position(|f| *f == focused)
            .unwrap_or_else(|| self.focus.min(fields.len() - 1));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState, palette: &Palette) {
        render_auth_modal(frame, self, area, tui, palette);
    }
}

fn field_label(field: Field, language: Language) -> &'static str {
    field
        .label_key()
        .map_or(field.label(), |key| translate(language, key))
}

fn render_auth_modal(
    frame: &mut Frame,
    modal: &AuthModalState,
    area: Rect,
    tui: &TuiState,
    palette: &Palette,
) {
    use super::render_utils::{InputHint, OverlayConfig, render_overlay, render_separator};

    let language = tui.language;
    let fields = modal.visible_fields();
    let footer_height = FOOTER_ROWS + u16::from(modal.submit_error.is_some()) * 2;
    let field_rows = fields.len() as u16 * 2 + modal.errors.len() as u16;
    let height = 3 + HEADER_ROWS + field_rows + footer_height;

    let toggle_hint = match modal.mode {
        AuthMode::Login => "sign up instead",
        AuthMode::Signup => "sign in instead",
    };
    let hints = [
        InputHint::new("Tab", "next"),
        InputHint::new("Enter", "submit"),
        InputHint::new("^T", toggle_hint),
        InputHint::new("^P", "show password"),
        InputHint::new("Esc", "close"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: translate(language, modal.mode.title_key()),
            border_color: palette.accent,
            width: 64,
            height,
            hints: &hints,
        },
        palette,
    );
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_ROWS),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(layout.body);
    let value_width = body.width.saturating_sub(4) as usize;

    let subtitle = match modal.mode {
        AuthMode::Login => "Welcome back! Sign in to your account.",
        AuthMode::Signup => "Create your account to get started.",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(subtitle, palette.dim()))),
        header,
    );
    render_separator(frame, header, 1, palette);

    let mut lines = Vec::new();
    let mut focus_rows = (0, 0);
    for (index, field) in fields.iter().copied().enumerate() {
        let start = lines.len();
        let focused = index == modal.focus && !modal.is_submitting();
        let label_style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.text()
        };
        lines.push(Line::from(Span::styled(field_label(field, language), label_style)));
        lines.push(field_value_line(modal, field, focused, value_width, palette));
        if let Some(error) = modal.errors.get(field) {
            lines.push(Line::from(Span::styled(
                truncate_with_ellipsis(&format!("  {error}"), body.width as usize),
                Style::default().fg(palette.error),
            )));
        }
        if index == modal.focus {
            focus_rows = (start, lines.len());
        }
    }
    let offset = field_scroll(focus_rows.0, focus_rows.1, body.height as usize);
    frame.render_widget(
        Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0)),
        body,
    );

    let mut footer_lines = Vec::new();
    if let Some(error) = &modal.submit_error {
        footer_lines.push(Line::default());
        footer_lines.push(Line::from(Span::styled(
            truncate_with_ellipsis(&format!("⚠ {error}"), footer.width as usize),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )));
    }
    footer_lines.push(Line::default());
    let button = if modal.is_submitting() {
        let frame_index = (tui.tick as usize) % SPINNER_FRAMES.len();
        format!(
            " {} {} ",
            SPINNER_FRAMES[frame_index],
            translate(language, "common.loading")
        )
    } else {
        format!(" {} ", translate(language, modal.mode.title_key()))
    };
    footer_lines.push(Line::from(Span::styled(button, palette.selected())).centered());
    frame.render_widget(Paragraph::new(footer_lines), footer);
}

/// First visible row of the field list such that rows
/// `focus_start..focus_end` fit in a viewport `height` rows tall. A focused
/// field taller than the viewport shows from its label.
fn field_scroll(focus_start: usize, focus_end: usize, height: usize) -> usize {
    focus_end.saturating_sub(height).min(focus_start)
}

fn field_value_line(
    modal: &AuthModalState,
    field: Field,
    focused: bool,
    width: usize,
    palette: &Palette,
) -> Line<'static> {
    let prompt = Span::styled(
        if focused { "▸ " } else { "  " },
        Style::default().fg(palette.accent),
    );

    if field == Field::Role {
        return match modal.form.role {
            Some(role) => Line::from(vec![
                prompt,
                Span::styled(if focused { "◂ " } else { "" }, palette.dim()),
                Span::styled(role.display_name(), palette.strong()),
                Span::styled(if focused { " ▸" } else { "" }, palette.dim()),
                Span::styled(
                    truncate_with_ellipsis(
                        &format!("  {}", role.description()),
                        width.saturating_sub(role.display_name().len() + 4),
                    ),
                    palette.dim(),
                ),
            ]),
            None => Line::from(vec![
                prompt,
                Span::styled(
                    if focused {
                        "◂ Select your role ▸"
                    } else {
                        "Select your role"
                    },
                    palette.dim(),
                ),
            ]),
        };
    }

    let raw = modal.form.value(field);
    let cursor = Span::styled(
        if focused { "█" } else { "" },
        Style::default().fg(palette.accent),
    );
    if raw.is_empty() {
        return Line::from(vec![
            prompt,
            cursor,
            Span::styled(field.placeholder(), palette.dim()),
        ]);
    }
    let shown = if field == Field::Password && !modal.show_password {
        mask_secret(raw)
    } else {
        raw.to_string()
    };
    Line::from(vec![
        prompt,
        Span::styled(truncate_with_ellipsis(&shown, width), palette.text()),
        cursor,
    ])
}

#[cfg(test)]
mod tests {
    use quickfund_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(modal: &mut AuthModalState, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            modal.handle_key(tui, key(KeyCode::Char(c)));
        }
    }

    fn focus(modal: &mut AuthModalState, field: Field) {
        modal.focus = modal
            .visible_fields()
            .iter()
            .position(|f| *f == field)
            .unwrap();
    }

    #[test]
    fn test_invalid_submit_shows_errors_without_effect() {
        let mut tui = TuiState::new(Config::default());
        let (mut modal, _) = AuthModalState::open(AuthMode::Login);
        let update = modal.handle_key(&mut tui, key(KeyCode::Enter));
        assert!(update.effects.is_empty());
        assert_eq!(modal.phase, SubmitPhase::Editing);
        assert_eq!(modal.errors.get(Field::Email), Some("Email is required"));
        assert_eq!(modal.focused(), Field::Email);
    }

    #[test]
    fn test_valid_login_emits_submit_with_default_role() {
        let mut tui = TuiState::new(Config::default());
        let (mut modal, _) = AuthModalState::open(AuthMode::Login);
        focus(&mut modal, Field::Email);
        type_text(&mut modal, &mut tui, "demo@quickfund.com");
        focus(&mut modal, Field::Password);
        type_text(&mut modal, &mut tui, "demo1234");

        let update = modal.handle_key(&mut tui, key(KeyCode::Enter));
        let [UiEffect::SubmitAuth {
            task: Some(task),
            request: AuthRequest::Login(request),
        }] = update.effects.as_slice()
        else {
            panic!("expected a login submit effect");
        };
        assert_eq!(request.role, Role::Individual);
        assert_eq!(modal.phase, SubmitPhase::Submitting { task: *task });
    }

    #[test]
    fn test_submit_ignored_while_submitting() {
        let mut tui = TuiState::new(Config::default());
        let (mut modal, _) = AuthModalState::open(AuthMode::Login);
        modal.phase = SubmitPhase::Submitting { task: TaskId(9) };
        let update = modal.handle_key(&mut tui, key(KeyCode::Enter));
        assert!(update.effects.is_empty());
        type_text(&mut modal, &mut tui, "x");
        assert!(modal.form.email.is_empty());
    }

    #[test]
    fn test_toggle_keeps_values_and_drops_hidden_errors() {
        let mut tui = TuiState::new(Config::default());
        let (mut modal, _) = AuthModalState::open(AuthMode::Signup);
        modal.form.email = "asha@example.in".into();
        modal.form.password = "secret1".into();
        modal.handle_key(&mut tui, key(KeyCode::Enter));
        assert!(modal.errors.contains(Field::Name));

        modal.handle_key(&mut tui, ctrl('t'));
        assert_eq!(modal.mode, AuthMode::Login);
        assert_eq!(modal.form.email, "asha@example.in");
        assert_eq!(modal.form.password, "secret1");
        assert!(!modal.errors.contains(Field::Name));
        assert!(!modal.errors.contains(Field::Role));
        assert!(modal.focus < modal.visible_fields().len());
    }

    #[test]
    fn test_role_selection_reveals_organization_fields() {
        let mut tui = TuiState::new(Config::default());
        let (mut modal, _) = AuthModalState::open(AuthMode::Signup);
        focus(&mut modal, Field::Role);
        modal.handle_key(&mut tui, key(KeyCode::Left));
        assert_eq!(modal.form.role, Some(Role::Organization));
        assert!(modal.visible_fields().contains(&Field::Organization));
        assert_eq!(modal.focused(), Field::Role);

        modal.handle_key(&mut tui, key(KeyCode::Right));
        assert_eq!(modal.form.role, Some(Role::Individual));
        assert!(!modal.visible_fields().contains(&Field::Organization));
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut tui = TuiState::new(Config::default());
        let (mut modal, _) = AuthModalState::open(AuthMode::Login);
        modal.handle_key(&mut tui, key(KeyCode::Enter));
        assert!(modal.errors.contains(Field::Email));
        type_text(&mut modal, &mut tui, "a");
        assert!(!modal.errors.contains(Field::Email));
        assert!(modal.errors.contains(Field::Password));
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let (mut modal, _) = AuthModalState::open(AuthMode::Login);
        focus(&mut modal, Field::Email);
        modal.handle_paste("asha@example.in\n");
        assert_eq!(modal.form.email, "asha@example.in");
    }

    #[test]
    fn test_escape_closes() {
        let mut tui = TuiState::new(Config::default());
        let (mut modal, _) = AuthModalState::open(AuthMode::Login);
        let update = modal.handle_key(&mut tui, key(KeyCode::Esc));
        assert!(matches!(
            update.transition,
            super::super::OverlayTransition::Close
        ));
    }

    fn draw_rows(modal: &AuthModalState, tui: &TuiState, width: u16, height: u16) -> Vec<String> {
        let palette = Palette::for_theme(tui.theme);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                modal.render(frame, area, tui, &palette);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn organization_signup(tui: &mut TuiState) -> AuthModalState {
        let (mut modal, _) = AuthModalState::open(AuthMode::Signup);
        modal.form.role = Some(Role::Organization);
        modal.handle_key(tui, key(KeyCode::Enter));
        assert!(modal.errors.contains(Field::Organization));
        modal
    }

    #[test]
    fn test_field_scroll_keeps_focus_in_view() {
        assert_eq!(field_scroll(0, 2, 10), 0);
        assert_eq!(field_scroll(8, 10, 10), 0);
        assert_eq!(field_scroll(23, 25, 15), 10);
        assert_eq!(field_scroll(4, 30, 10), 4);
    }

    #[test]
    fn test_last_field_and_submit_visible_on_small_terminal() {
        let mut tui = TuiState::new(Config::default());
        let mut modal = organization_signup(&mut tui);
        focus(&mut modal, Field::Pincode);

        let rows = draw_rows(&modal, &tui, 80, 24);
        let pin_row = rows.iter().position(|row| row.contains("PIN Code"));
        let button_row = rows.iter().rposition(|row| row.contains("Sign Up"));
        let (Some(pin_row), Some(button_row)) = (pin_row, button_row) else {
            panic!("PIN Code or submit button missing:\n{}", rows.join("\n"));
        };
        assert!(button_row > pin_row);
        assert!(rows.iter().any(|row| row.contains("Create your account")));
        assert!(!rows.iter().any(|row| row.contains("Full Name")));
    }

    #[test]
    fn test_first_field_visible_after_scrolling_back() {
        let mut tui = TuiState::new(Config::default());
        let mut modal = organization_signup(&mut tui);
        focus(&mut modal, Field::Pincode);
        focus(&mut modal, Field::Role);

        let rows = draw_rows(&modal, &tui, 80, 24);
        assert!(rows.iter().any(|row| row.contains("I am a")));
        assert!(!rows.iter().any(|row| row.contains("PIN Code")));
        assert!(rows.iter().skip(2).any(|row| row.contains("Sign Up")));
    }

    #[test]
    fn test_banner_and_spinner_stay_visible_while_submitting() {
        let mut tui = TuiState::new(Config::default());
        let mut modal = organization_signup(&mut tui);
        modal.submit_error = Some("Email already registered".into());
        let rows = draw_rows(&modal, &tui, 80, 24);
        assert!(rows.iter().any(|row| row.contains("Email already registered")));

        modal.submit_error = None;
        modal.phase = SubmitPhase::Submitting { task: TaskId(3) };
        let rows = draw_rows(&modal, &tui, 80, 24);
        assert!(rows.iter().any(|row| row.contains("Loading...")));
    }
}
