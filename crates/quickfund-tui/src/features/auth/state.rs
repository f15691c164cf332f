use quickfund_core::auth::Session;

use crate::mutations::AuthMutation;

/// Signed-in session, if any. Created empty at startup; never persisted.
#[derive(Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.name.as_str())
    }

    pub fn apply(&mut self, mutation: AuthMutation) {
        match mutation {
            AuthMutation::SignedIn(session) => {
                tracing::info!(user = %session.user.email, role = %session.user.role, "signed in");
                self.session = Some(session);
            }
            AuthMutation::SignedOut => {
                self.session = None;
            }
        }
    }
}
