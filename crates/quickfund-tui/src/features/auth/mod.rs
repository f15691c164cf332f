//! Session state and auth result handling.

mod state;
mod update;

pub use state::AuthState;
pub use update::{AuthModalAction, handle_auth_result, handle_logout_result, start_logout};
