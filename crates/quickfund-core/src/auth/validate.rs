use std::sync::LazyLock;

use regex::Regex;

use super::{AuthMode, Field, FieldErrors, FormData, Role};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const PHONE_DIGITS: usize = 10;

const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Digits left after stripping separators.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Password length in UTF-16 code units, the unit browsers count in.
pub fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone_digits(phone).len() == PHONE_DIGITS
}

/// Runs every rule that applies to `mode` and the selected role.
///
/// The result only ever names fields returned by
/// [`FormData::visible_fields`]; an empty map means the form can be
/// submitted.
pub fn validate(form: &FormData, mode: AuthMode) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "Email is invalid");
    }

    if form.password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if password_len(&form.password) < MIN_PASSWORD_LEN {
        errors.insert(
            Field::Password,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }

    if mode == AuthMode::Login {
        return errors;
    }

    if form.name.is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if form.phone.is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    } else if !is_valid_phone(&form.phone) {
        errors.insert(Field::Phone, "Please enter a valid 10-digit phone number");
    }

    match form.role {
        None => errors.insert(Field::Role, "Please select a role"),
        Some(Role::Organization) => {
            if form.organization.is_empty() {
                errors.insert(Field::Organization, "Organization name is required");
            }
        }
        Some(Role::Individual | Role::Donor | Role::Administrator) => {}
    }

    errors
}
