use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// Report attached to a regulation, as embedded in `GET /reglements`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRef {
    pub id: u64,
    /// Public identifier of the rendered HTML report.
    #[serde(default)]
    pub uuid: Option<String>,
}

/// An imported regulatory text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Regulation {
    pub id: u64,
    pub titre: String,
    #[serde(default)]
    pub date_publication: Option<String>,
    /// Category reference: a backend id or, for unmapped texts, a category name.
    #[serde(default, deserialize_with = "super::optional_key")]
    pub categorie_id: Option<String>,
    #[serde(default)]
    pub rapport: Option<ReportRef>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Regulation {
    pub fn has_report(&self) -> bool {
        self.rapport.is_some()
    }
}

impl Searchable for Regulation {
    fn matches(&self, needle: &str) -> bool {
        self.titre.to_lowercase().contains(needle)
    }
}

/// A regulation category (`GET /categories`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "super::key")]
    pub id: String,
    pub nom: String,
    #[serde(default)]
    pub couleur: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regulation_accepts_numeric_and_string_category() {
        let regs: Vec<Regulation> = serde_json::from_str(
            r#"[
                {"id":1,"titre":"Décret 2-14-841","date_publication":"2024-05-03","categorie_id":4,
                 "rapport":{"id":9,"uuid":"f1e2"},"url":"https://sgg.gov.ma/x","created_at":"2024-05-03 09:12:00"},
                {"id":2,"titre":"Circulaire","categorie_id":"Pharmacovigilance","rapport":null},
                {"id":3,"titre":"Arrêté"}
            ]"#,
        )
        .unwrap();

        assert_eq!(regs[0].categorie_id.as_deref(), Some("4"));
        assert!(regs[0].has_report());
        assert_eq!(regs[1].categorie_id.as_deref(), Some("Pharmacovigilance"));
        assert!(!regs[1].has_report());
        assert!(regs[2].categorie_id.is_none());
        assert!(regs[2].url.is_none());
    }

    #[test]
    fn test_category_numeric_id() {
        let cat: Category = serde_json::from_str(r#"{"id":12,"nom":"Pharmacovigilance"}"#).unwrap();
        assert_eq!(cat.id, "12");
        assert!(cat.couleur.is_none());
    }
}
