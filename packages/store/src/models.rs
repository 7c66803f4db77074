//! # Session-side models
//!
//! The types persisted alongside the bearer token. They are shared with the
//! `api` crate, which re-exports them, so the profile returned by `POST /login`
//! can be stored verbatim.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | The account role. Only `admin` and `utilisateur` are known; anything else decodes to [`Role::Unknown`] and sees no role-gated menu entry. |
//! | [`SessionUser`] | The profile blob kept under the `user` key. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role as sent by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Utilisateur,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles an administrator can assign from the users page.
    pub const ASSIGNABLE: [Role; 2] = [Role::Utilisateur, Role::Admin];

    /// Wire value (`"admin"`, `"utilisateur"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Utilisateur => "utilisateur",
            Role::Unknown => "inconnu",
        }
    }

    /// Human label used in the role select.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::Utilisateur => "Utilisateur",
            Role::Unknown => "Inconnu",
        }
    }

    /// Parse a select value back into a role.
    pub fn from_value(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            "utilisateur" => Role::Utilisateur,
            _ => Role::Unknown,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logged-in user profile kept in client storage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "unknown_role")]
    pub role: Role,
}

fn unknown_role() -> Role {
    Role::Unknown
}

impl SessionUser {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_values() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"utilisateur\"").unwrap();
        assert_eq!(role, Role::Utilisateur);
        let role: Role = serde_json::from_str("\"superviseur\"").unwrap();
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn test_session_user_missing_role_is_unknown() {
        let user: SessionUser = serde_json::from_str(r#"{"name":"Ana","email":"a@b.com"}"#).unwrap();
        assert_eq!(user.role, Role::Unknown);
        assert_eq!(user.display_name(), "Ana");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = SessionUser {
            email: "a@b.com".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "a@b.com");
    }
}
