//! # User accounts
//!
//! [`User`] is a row of `GET /utilisateurs`. It never carries a password: the
//! backend only accepts one on creation through [`UserPayload::mot_de_passe`],
//! which is skipped when serialising an update.

use serde::{Deserialize, Serialize};
use store::Role;

use crate::filter::Searchable;

/// A managed user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub nom: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl Searchable for User {
    fn matches(&self, needle: &str) -> bool {
        self.nom.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

/// Body of `POST /utilisateurs` and `PUT /utilisateurs/:id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserPayload {
    pub nom: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mot_de_passe: Option<String>,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_payload_omits_password() {
        let payload = UserPayload {
            nom: "Ana".into(),
            email: "ana@lab.ma".into(),
            role: Role::Admin,
            mot_de_passe: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"nom":"Ana","email":"ana@lab.ma","role":"admin"}"#);
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let user = User {
            id: 1,
            nom: "Salma Idrissi".into(),
            email: "s.idrissi@lab.ma".into(),
            role: Role::Utilisateur,
        };
        assert!(user.matches("salma"));
        assert!(user.matches("lab.ma"));
        assert!(!user.matches("karim"));
    }
}
