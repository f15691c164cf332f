//! Offline form validation command.

use anyhow::{Result, bail};
use quickfund_core::auth::{self, AuthMode, FormData, Role};

pub struct ValidateInput {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub role: Option<Role>,
    pub organization: String,
}

/// Runs the auth form rules; prints `valid` or one `field: message` line per
/// failing field and fails.
pub fn run(input: &ValidateInput) -> Result<()> {
    let form = FormData {
        name: input.name.clone(),
        email: input.email.clone(),
        password: input.password.clone(),
        phone: input.phone.clone(),
        role: input.role,
        organization: input.organization.clone(),
        ..FormData::default()
    };

    let errors = auth::validate(&form, input.mode);
    if errors.is_empty() {
        println!("valid");
        return Ok(());
    }

    for (field, message) in errors.iter() {
        println!("{}: {message}", field.name());
    }
    bail!("{} field(s) failed validation", errors.len());
}
