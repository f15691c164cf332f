use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FormData, Role};

/// Account returned by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful login or signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginRequest {
    /// Login uses the selected role, or `Individual` when none was picked.
    pub fn from_form(form: &FormData) -> Self {
        Self {
            email: form.email.clone(),
            password: form.password.clone(),
            role: form.role.unwrap_or(Role::Individual),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationDetails>,
}

/// Extra signup details collected for organization accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDetails {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl SignupRequest {
    /// Builds the request from a validated form.
    ///
    /// Organization details are only carried for the organization role; the
    /// fields of other roles are hidden and never submitted.
    pub fn from_form(form: &FormData) -> Self {
        let role = form.role.unwrap_or(Role::Individual);
        let organization = match role {
            Role::Organization => Some(OrganizationDetails {
                name: form.organization.trim().to_string(),
                address: form.address.trim().to_string(),
                city: form.city.trim().to_string(),
                state: form.state.trim().to_string(),
                pincode: form.pincode.trim().to_string(),
            }),
            Role::Individual | Role::Donor | Role::Administrator => None,
        };
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            phone: form.phone.trim().to_string(),
            role,
            organization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_defaults_to_individual_role() {
        let form = FormData {
            email: "a@b.co".into(),
            password: "123456".into(),
            ..FormData::default()
        };
        assert_eq!(LoginRequest::from_form(&form).role, Role::Individual);
    }

    #[test]
    fn test_signup_drops_org_fields_for_other_roles() {
        let mut form = FormData {
            name: "Ravi".into(),
            organization: "Helping Hands".into(),
            role: Some(Role::Donor),
            ..FormData::default()
        };
        assert!(SignupRequest::from_form(&form).organization.is_none());

        form.role = Some(Role::Organization);
        let request = SignupRequest::from_form(&form);
        assert_eq!(
            request.organization.map(|org| org.name),
            Some("Helping Hands".to_string())
        );
    }

    #[test]
    fn test_user_uses_camel_case_fields() {
        let json = r#"{
            "id": "u1",
            "email": "a@b.co",
            "name": "A",
            "role": "donor",
            "createdAt": "2024-01-02T03:04:05Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Donor);
        assert!(user.phone.is_none());
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("createdAt").is_some());
    }
}
