//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! ## Cancellation Effects
//!
//! Cancellation is initiated from the reducer via `UiEffect::CancelTask`.
//! The runtime executes these by calling `token.cancel()` on the provided token.

use quickfund_core::auth::{AuthMode, LoginRequest, Session, SignupRequest};
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

/// Credentials handed to the auth backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl AuthRequest {
    pub fn mode(&self) -> AuthMode {
        match self {
            AuthRequest::Login(_) => AuthMode::Login,
            AuthRequest::Signup(_) => AuthMode::Signup,
        }
    }
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Send login/signup credentials to the auth backend.
    SubmitAuth {
        task: Option<TaskId>,
        request: AuthRequest,
    },

    /// End a session on the auth backend.
    Logout {
        task: Option<TaskId>,
        session: Session,
    },

    /// Cancel an in-flight task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },

    /// Open a URL (`mailto:` included) with the system handler.
    OpenUrl { url: String },
}
