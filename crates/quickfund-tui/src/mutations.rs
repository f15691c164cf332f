//! Cross-slice state mutations.
//!
//! Feature handlers and overlays return `StateMutation`s instead of reaching
//! into slices they do not own; the reducer applies them in order.

use quickfund_core::auth::Session;
use quickfund_core::i18n::Language;

use crate::features::toast::Toast;

#[derive(Debug)]
pub enum StateMutation {
    Auth(AuthMutation),
    Settings(SettingsMutation),
    Toast(Toast),
}

#[derive(Debug)]
pub enum AuthMutation {
    SignedIn(Session),
    SignedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsMutation {
    SetLanguage(Language),
    ToggleTheme,
}
