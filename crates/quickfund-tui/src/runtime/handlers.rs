//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that perform I/O and return a
//! `UiEvent`. They never touch state; the runtime spawns them and sends the
//! result to the inbox.

use quickfund_core::auth::{AuthClient, Session};
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;
use crate::effects::AuthRequest;
use crate::events::{AuthUiEvent, UiEvent};

/// Sends login/signup credentials to the backend.
///
/// Resolves to `Cancelled` as soon as `cancel` fires; the in-flight request
/// is dropped.
pub async fn auth_submit(
    client: AuthClient,
    task: TaskId,
    request: AuthRequest,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let mode = request.mode();
    let call = async {
        match &request {
            AuthRequest::Login(login) => {
                client
                    .login(&login.email, &login.password, login.role)
                    .await
            }
            AuthRequest::Signup(signup) => client.signup(signup).await,
        }
    };

    let result = if let Some(cancel) = cancel {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                return UiEvent::Auth(AuthUiEvent::Cancelled { task });
            }
            result = call => result,
        }
    } else {
        call.await
    };

    UiEvent::Auth(AuthUiEvent::Completed {
        task,
        mode,
        result: result.map_err(|e| format!("{e:#}")),
    })
}

/// Ends the session on the backend.
pub async fn logout(client: AuthClient, session: Session) -> UiEvent {
    let result = client.logout(&session).await.map_err(|e| format!("{e:#}"));
    UiEvent::Auth(AuthUiEvent::LoggedOut { result })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use quickfund_core::auth::{DemoAuthBackend, FormData, LoginRequest, Role, SignupRequest};

    use super::*;

    fn demo_client() -> AuthClient {
        AuthClient::Demo(DemoAuthBackend::new(Duration::ZERO))
    }

    fn login(email: &str, password: &str) -> AuthRequest {
        AuthRequest::Login(LoginRequest {
            email: email.into(),
            password: password.into(),
            role: Role::Individual,
        })
    }

    #[tokio::test]
    async fn test_demo_login_completes() {
        let event = auth_submit(
            demo_client(),
            TaskId(1),
            login(DemoAuthBackend::DEMO_EMAIL, DemoAuthBackend::DEMO_PASSWORD),
            Some(CancellationToken::new()),
        )
        .await;
        let UiEvent::Auth(AuthUiEvent::Completed { task, result, .. }) = event else {
            panic!("expected Completed, got {event:?}");
        };
        assert_eq!(task, TaskId(1));
        assert_eq!(result.unwrap().user.email, DemoAuthBackend::DEMO_EMAIL);
    }

    #[tokio::test]
    async fn test_wrong_password_is_reported_as_text() {
        let event = auth_submit(
            demo_client(),
            TaskId(2),
            login(DemoAuthBackend::DEMO_EMAIL, "wrong-password"),
            None,
        )
        .await;
        let UiEvent::Auth(AuthUiEvent::Completed { result, .. }) = event else {
            panic!("expected Completed");
        };
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_resolves_before_backend_answers() {
        let client = AuthClient::Demo(DemoAuthBackend::new(Duration::from_secs(30)));
        let cancel = CancellationToken::new();
        cancel.cancel();
        let form = FormData {
            name: "Asha".into(),
            email: "asha@example.in".into(),
            password: "secret12".into(),
            phone: "9876543210".into(),
            role: Some(Role::Donor),
            ..FormData::default()
        };
        let request = AuthRequest::Signup(SignupRequest::from_form(&form));

        let event = auth_submit(client, TaskId(3), request, Some(cancel)).await;
        assert!(matches!(
            event,
            UiEvent::Auth(AuthUiEvent::Cancelled { task: TaskId(3) })
        ));
    }

    #[tokio::test]
    async fn test_logout_after_login() {
        let client = demo_client();
        let session = client
            .login(
                DemoAuthBackend::DEMO_EMAIL,
                DemoAuthBackend::DEMO_PASSWORD,
                Role::Donor,
            )
            .await
            .unwrap();
        let event = logout(client, session).await;
        assert!(matches!(
            event,
            UiEvent::Auth(AuthUiEvent::LoggedOut { result: Ok(()) })
        ));
    }
}
