//! Auth feature reducer.
//!
//! Turns backend results into state mutations and tells the reducer what to
//! do with the auth modal.

use quickfund_core::auth::{AuthMode, Session};

use super::AuthState;
use crate::common::{TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::features::toast::Toast;
use crate::mutations::{AuthMutation, StateMutation};

#[derive(Debug, PartialEq, Eq)]
pub enum AuthModalAction {
    Close,
    ShowError(String),
}

pub fn handle_auth_result(
    mode: AuthMode,
    result: Result<Session, String>,
) -> (Vec<StateMutation>, AuthModalAction) {
    match result {
        Ok(session) => {
            let greeting = match mode {
                AuthMode::Login => format!("Welcome back, {}!", session.user.name),
                AuthMode::Signup => format!("Welcome to QuickFund, {}!", session.user.name),
            };
            (
                vec![
                    StateMutation::Auth(AuthMutation::SignedIn(session)),
                    StateMutation::Toast(Toast::success(greeting)),
                ],
                AuthModalAction::Close,
            )
        }
        Err(error) => {
            tracing::warn!(?mode, %error, "auth submission failed");
            (vec![], AuthModalAction::ShowError(error))
        }
    }
}

/// Signs out locally and asks the backend to end the session.
///
/// No-op when signed out or while a logout is already in flight.
pub fn start_logout(
    auth: &AuthState,
    tasks: &Tasks,
    seq: &mut TaskSeq,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    if tasks.logout.is_running() {
        return (vec![], vec![]);
    }
    let Some(session) = auth.session.clone() else {
        return (vec![], vec![]);
    };
    (
        vec![UiEffect::Logout {
            task: Some(seq.next_id()),
            session,
        }],
        vec![StateMutation::Auth(AuthMutation::SignedOut)],
    )
}

pub fn handle_logout_result(result: Result<(), String>) -> Vec<StateMutation> {
    match result {
        Ok(()) => vec![StateMutation::Toast(Toast::info("Signed out."))],
        Err(error) => {
            tracing::warn!(%error, "logout failed");
            vec![StateMutation::Toast(Toast::error(error))]
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use quickfund_core::auth::{Role, User};

    use super::*;

    fn session() -> Session {
        Session {
            user: User {
                id: "u1".into(),
                email: "asha@example.in".into(),
                name: "Asha".into(),
                role: Role::Donor,
                phone: None,
                avatar: None,
                created_at: Utc::now(),
            },
            token: "t".into(),
        }
    }

    #[test]
    fn test_success_signs_in_and_closes() {
        let (mutations, action) = handle_auth_result(AuthMode::Login, Ok(session()));
        assert_eq!(action, AuthModalAction::Close);
        assert!(matches!(
            mutations.first(),
            Some(StateMutation::Auth(AuthMutation::SignedIn(_)))
        ));
        assert!(matches!(
            mutations.get(1),
            Some(StateMutation::Toast(t)) if t.message == "Welcome back, Asha!"
        ));
    }

    #[test]
    fn test_failure_keeps_modal_with_error() {
        let (mutations, action) = handle_auth_result(
            AuthMode::Signup,
            Err("Signup failed: An account with this email already exists".into()),
        );
        assert!(mutations.is_empty());
        assert_eq!(
            action,
            AuthModalAction::ShowError(
                "Signup failed: An account with this email already exists".into()
            )
        );
    }

    #[test]
    fn test_logout_requires_session() {
        let auth = AuthState::default();
        let (effects, mutations) = start_logout(&auth, &Tasks::default(), &mut TaskSeq::default());
        assert!(effects.is_empty());
        assert!(mutations.is_empty());
    }

    #[test]
    fn test_logout_signs_out_and_spawns_task() {
        let auth = AuthState {
            session: Some(session()),
        };
        let (effects, mutations) = start_logout(&auth, &Tasks::default(), &mut TaskSeq::default());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Logout { task: Some(_), .. }]
        ));
        assert!(matches!(
            mutations.as_slice(),
            [StateMutation::Auth(AuthMutation::SignedOut)]
        ));
    }
}
