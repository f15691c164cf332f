use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Role;

/// Whether the auth form is configured for login or signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Translation key for the mode's title and submit button.
    pub fn title_key(self) -> &'static str {
        match self {
            AuthMode::Login => "auth.login",
            AuthMode::Signup => "auth.signup",
        }
    }
}

impl std::str::FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" | "signin" => Ok(AuthMode::Login),
            "signup" | "register" => Ok(AuthMode::Signup),
            other => Err(format!("unknown mode '{other}' (expected login or signup)")),
        }
    }
}

/// Named fields of the auth form, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Role,
    Name,
    Phone,
    Email,
    Password,
    Organization,
    Address,
    City,
    State,
    Pincode,
}

impl Field {
    /// Wire/field name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Role => "role",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Password => "password",
            Field::Organization => "organization",
            Field::Address => "address",
            Field::City => "city",
            Field::State => "state",
            Field::Pincode => "pincode",
        }
    }

    /// English label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Role => "I am a",
            Field::Name => "Full Name",
            Field::Phone => "Phone Number",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Organization => "Organization Name",
            Field::Address => "Address",
            Field::City => "City",
            Field::State => "State",
            Field::Pincode => "PIN Code",
        }
    }

    /// Translation key for fields that have localized labels.
    pub fn label_key(self) -> Option<&'static str> {
        match self {
            Field::Role => Some("auth.role"),
            Field::Email => Some("auth.email"),
            Field::Password => Some("auth.password"),
            _ => None,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Role => "Select your role",
            Field::Name => "Enter your full name",
            Field::Phone => "Enter your phone number",
            Field::Email => "Enter your email address",
            Field::Password => "Enter your password",
            Field::Organization => "Enter organization name",
            Field::Address => "Enter organization address",
            Field::City => "City",
            Field::State => "State",
            Field::Pincode => "PIN Code",
        }
    }

    /// True for fields edited by typing (everything except the role selector).
    pub fn is_text(self) -> bool {
        !matches!(self, Field::Role)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values of the login/signup form.
///
/// One struct covers both modes; `role` is the discriminant that decides
/// which organization fields apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Option<Role>,
    pub organization: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl FormData {
    /// Fields shown (and therefore validated) for `mode` and the current role.
    pub fn visible_fields(&self, mode: AuthMode) -> Vec<Field> {
        match mode {
            AuthMode::Login => vec![Field::Role, Field::Email, Field::Password],
            AuthMode::Signup => {
                let mut fields = vec![
                    Field::Role,
                    Field::Name,
                    Field::Phone,
                    Field::Email,
                    Field::Password,
                ];
                if self.role == Some(Role::Organization) {
                    fields.extend([
                        Field::Organization,
                        Field::Address,
                        Field::City,
                        Field::State,
                        Field::Pincode,
                    ]);
                }
                fields
            }
        }
    }

    /// Current value of a field; the role renders as its id.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Role => self.role.map_or("", Role::id),
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Organization => &self.organization,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Pincode => &self.pincode,
        }
    }

    /// Mutable text for typed fields; `None` for the role selector.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Role => None,
            Field::Name => Some(&mut self.name),
            Field::Phone => Some(&mut self.phone),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Organization => Some(&mut self.organization),
            Field::Address => Some(&mut self.address),
            Field::City => Some(&mut self.city),
            Field::State => Some(&mut self.state),
            Field::Pincode => Some(&mut self.pincode),
        }
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = FormData::default();
    }
}

/// Per-field validation messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Drops messages for fields not in `visible`.
    pub fn retain_fields(&mut self, visible: &[Field]) {
        self.0.retain(|field, _| visible.contains(field));
    }

    /// First field (in form order) that carries an error.
    pub fn first(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retain_fields_drops_hidden_errors() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, "Name is required");
        errors.insert(Field::Email, "Email is required");
        errors.retain_fields(&FormData::default().visible_fields(AuthMode::Login));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email]);
        assert_eq!(errors.first(), Some(Field::Email));
    }

    #[test]
    fn test_login_shows_role_email_password() {
        let form = FormData::default();
        assert_eq!(
            form.visible_fields(AuthMode::Login),
            vec![Field::Role, Field::Email, Field::Password]
        );
    }

    #[test]
    fn test_organization_fields_only_for_organization_signup() {
        let mut form = FormData {
            role: Some(Role::Donor),
            ..FormData::default()
        };
        assert!(
            !form
                .visible_fields(AuthMode::Signup)
                .contains(&Field::Organization)
        );

        form.role = Some(Role::Organization);
        let fields = form.visible_fields(AuthMode::Signup);
        assert!(fields.contains(&Field::Organization));
        assert!(fields.contains(&Field::Pincode));
        assert!(
            !form
                .visible_fields(AuthMode::Login)
                .contains(&Field::Organization)
        );
    }

    #[test]
    fn test_text_mut_excludes_role() {
        let mut form = FormData::default();
        assert!(form.text_mut(Field::Role).is_none());
        form.text_mut(Field::City).unwrap().push_str("Pune");
        assert_eq!(form.value(Field::City), "Pune");
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.toggled(), AuthMode::Login);
    }
}
