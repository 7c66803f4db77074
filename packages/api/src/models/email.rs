use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// A notification recipient (`GET /emails`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationEmail {
    pub id: u64,
    pub name: String,
    pub adresse: String,
}

impl Searchable for NotificationEmail {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.adresse.to_lowercase().contains(needle)
    }
}

/// Body of `POST /emails` and `PUT /emails/:id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmailPayload {
    pub name: String,
    pub adresse: String,
}

/// Audit row of `GET /emails_envoyes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentEmail {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub sujet: String,
    pub date_envoi: String,
}
