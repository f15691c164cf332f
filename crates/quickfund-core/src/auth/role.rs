use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of platform participant.
///
/// Serialized with the backend's role ids (`user`, `donor`, `admin`,
/// `organization`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Someone seeking emergency financial assistance.
    #[serde(rename = "user")]
    Individual,
    #[serde(rename = "donor")]
    Donor,
    #[serde(rename = "admin")]
    Administrator,
    #[serde(rename = "organization")]
    Organization,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::Individual,
            Role::Donor,
            Role::Administrator,
            Role::Organization,
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            Role::Individual => "user",
            Role::Donor => "donor",
            Role::Administrator => "admin",
            Role::Organization => "organization",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Role::Individual => "Individual in Need",
            Role::Donor => "Donor",
            Role::Administrator => "Administrator",
            Role::Organization => "Organization",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::Individual => "Seeking emergency financial assistance",
            Role::Donor => "Contributing to help others in crisis",
            Role::Administrator => "Platform management and oversight",
            Role::Organization => "NGO or institution helping beneficiaries",
        }
    }

    /// Position in [`Role::all`].
    pub fn position(self) -> usize {
        Role::all().iter().position(|r| *r == self).unwrap_or(0)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "user" | "individual" => Ok(Role::Individual),
            "donor" => Ok(Role::Donor),
            "admin" | "administrator" => Ok(Role::Administrator),
            "organization" | "organisation" | "org" => Ok(Role::Organization),
            _ => Err(format!(
                "unknown role '{s}' (expected user, donor, admin or organization)"
            )),
        }
    }
}
